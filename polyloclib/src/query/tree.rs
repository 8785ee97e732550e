//! Directory tree rolling per-file counts up to every ancestor.
//!
//! Nodes live in an arena (`Vec<TreeNode>`) and refer to each other by
//! [`NodeId`]. The root is a synthetic node named [`ROOT_NAME`]; every file
//! path is split into segments hanging below it. A node with no children is
//! a file, anything else is a directory.
//!
//! Children are always created after their parent, so walking the arena
//! backwards visits every child before its parent. [`FileTree::aggregate`]
//! relies on this.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::data::FileStats;

/// Name of the synthetic root node.
pub const ROOT_NAME: &str = "index";

/// Index of a node in a [`FileTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One directory or file in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Path segment (file or directory name)
    pub name: String,
    /// Enclosing directory; `None` only for the root
    pub parent: Option<NodeId>,
    /// Children, in insertion order until sorted
    pub children: Vec<NodeId>,
    /// Code lines in this file, or in everything below this directory
    pub code: u64,
    /// Code lines per language
    pub languages: BTreeMap<String, u64>,
}

impl TreeNode {
    fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: Vec::new(),
            code: 0,
            languages: BTreeMap::new(),
        }
    }

    /// Whether this node is a file.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Aggregation tree over a set of scan results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    nodes: Vec<TreeNode>,
}

impl FileTree {
    /// Build, aggregate and sort in one go.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a FileStats>) -> Self {
        let mut tree = Self::build(results);
        tree.aggregate();
        tree.sort_by_code();
        tree
    }

    /// Lay out the tree without aggregating.
    ///
    /// Each file node receives its own code count and a single-entry
    /// language map; unsupported files get no language entry.
    pub fn build<'a>(results: impl IntoIterator<Item = &'a FileStats>) -> Self {
        let mut tree = Self {
            nodes: vec![TreeNode::new(ROOT_NAME, None)],
        };

        for result in results {
            let mut current = tree.root();
            for segment in path_segments(&result.path) {
                current = tree.child_or_insert(current, &segment);
            }
            if current == tree.root() {
                tracing::debug!(path = %result.path.display(), "path has no segments, skipping");
                continue;
            }

            let node = &mut tree.nodes[current.0];
            node.code = result.stats.code;
            if let Some(language) = &result.language {
                node.languages.insert(language.clone(), result.stats.code);
            }
        }

        tree
    }

    fn child_or_insert(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(&existing) = self.nodes[parent.0]
            .children
            .iter()
            .find(|&&child| self.nodes[child.0].name == name)
        {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(name, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Recompute every directory as the sum of its children.
    pub fn aggregate(&mut self) {
        for index in (0..self.nodes.len()).rev() {
            if self.nodes[index].is_leaf() {
                continue;
            }

            let mut code = 0;
            let mut languages = BTreeMap::new();
            for child in &self.nodes[index].children {
                let child = &self.nodes[child.0];
                code += child.code;
                for (language, count) in &child.languages {
                    *languages.entry(language.clone()).or_insert(0) += count;
                }
            }

            let node = &mut self.nodes[index];
            node.code = code;
            node.languages = languages;
        }
    }

    /// Order every node's children by descending code count.
    ///
    /// The sort is stable: equal counts keep insertion order.
    pub fn sort_by_code(&mut self) {
        let codes: Vec<u64> = self.nodes.iter().map(|node| node.code).collect();
        for node in &mut self.nodes {
            node.children.sort_by(|a, b| codes[b.0].cmp(&codes[a.0]));
        }
    }

    /// The synthetic root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Children of `id`, in their current order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.node(id)
            .children
            .iter()
            .map(move |&child| (child, self.node(child)))
    }

    /// Whether `id` is a file.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_leaf()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no files.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Nodes in depth-first pre-order following the current child order.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev());
        }
        order
    }

    /// Names from the root down to `id`, joined with `separator`.
    pub fn full_path(&self, id: NodeId, separator: &str) -> String {
        self.names_to(id).join(separator)
    }

    fn names_to(&self, id: NodeId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            names.push(node.name.as_str());
            current = node.parent;
        }
        names.reverse();
        names
    }

    /// Report file name for a directory node.
    ///
    /// Names from the root are joined with `-`. Inside a name, `-` and `_`
    /// are prefixed with `_`, so directories `a-b` and `a/b` get distinct
    /// keys. `None` stands for the (absent) parent of the root and maps to
    /// the root's own page, `index.html`.
    pub fn report_key(&self, id: Option<NodeId>) -> String {
        let Some(id) = id else {
            return format!("{ROOT_NAME}.html");
        };

        let mut key = String::new();
        for (i, name) in self.names_to(id).into_iter().enumerate() {
            if i > 0 {
                key.push('-');
            }
            for c in name.chars() {
                if c == '-' || c == '_' {
                    key.push('_');
                }
                key.push(c);
            }
        }
        key.push_str(".html");
        key
    }

    /// Languages under `id`, most code first, ties by name.
    pub fn ranked_languages(&self, id: NodeId) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .node(id)
            .languages
            .iter()
            .map(|(language, &count)| (language.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Split a path into tree segments. Root and prefix components and `.` are
/// dropped; `..` is kept as a segment.
fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Locs;
    use std::path::PathBuf;

    fn result(path: &str, language: Option<&str>, code: u64) -> FileStats {
        FileStats::new(
            PathBuf::from(path),
            language.map(String::from),
            Locs {
                code,
                comments: 1,
                blanks: 1,
                total: code + 2,
            },
        )
    }

    fn child_named(tree: &FileTree, parent: NodeId, name: &str) -> NodeId {
        tree.children(parent)
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id)
            .unwrap_or_else(|| panic!("no child named {name}"))
    }

    fn sample() -> Vec<FileStats> {
        vec![
            result("/home/file1.go", Some("go"), 10),
            result("/home/file2.java", Some("java"), 20),
            result("/test/file3.py", Some("python"), 30),
        ]
    }

    #[test]
    fn test_build_layout() {
        let tree = FileTree::build(&sample());
        let root = tree.root();

        assert_eq!(tree.node(root).name, "index");
        assert_eq!(tree.node(root).children.len(), 2);

        let children: Vec<_> = tree.children(root).map(|(_, n)| n.name.as_str()).collect();
        assert_eq!(children, vec!["home", "test"]);

        let home = child_named(&tree, root, "home");
        let files: Vec<_> = tree
            .children(home)
            .map(|(_, n)| (n.name.as_str(), n.code))
            .collect();
        assert_eq!(files, vec![("file1.go", 10), ("file2.java", 20)]);

        let test = child_named(&tree, root, "test");
        let file3 = child_named(&tree, test, "file3.py");
        assert_eq!(tree.node(file3).code, 30);
        assert_eq!(tree.node(file3).parent, Some(test));
        assert!(tree.is_leaf(file3));
    }

    #[test]
    fn test_build_merges_shared_prefixes() {
        let tree = FileTree::build(&[
            result("a/b/one.js", Some("JavaScript"), 1),
            result("a/b/two.js", Some("JavaScript"), 2),
            result("a/c/three.js", Some("JavaScript"), 3),
        ]);

        // root, a, b, one, two, c, three
        assert_eq!(tree.len(), 7);
        let a = child_named(&tree, tree.root(), "a");
        assert_eq!(tree.node(a).children.len(), 2);
    }

    #[test]
    fn test_aggregate_sums_children() {
        let mut tree = FileTree::build(&sample());
        tree.aggregate();
        let root = tree.root();

        assert_eq!(tree.node(root).code, 60);
        let home = child_named(&tree, root, "home");
        assert_eq!(tree.node(home).code, 30);
        assert_eq!(tree.node(home).languages.get("go"), Some(&10));
        assert_eq!(tree.node(home).languages.get("java"), Some(&20));
        assert_eq!(tree.node(root).languages.len(), 3);
    }

    #[test]
    fn test_aggregate_merges_language_maps() {
        let tree = FileTree::from_results(&[
            result("src/a.js", Some("JavaScript"), 10),
            result("src/b.py", Some("Python"), 20),
            result("lib/c.js", Some("JavaScript"), 5),
        ]);

        let languages = &tree.node(tree.root()).languages;
        assert_eq!(languages.get("JavaScript"), Some(&15));
        assert_eq!(languages.get("Python"), Some(&20));
    }

    #[test]
    fn test_aggregate_deep_tree() {
        let depth = 200;
        let path: String = (0..depth).map(|i| format!("d{i}/")).collect::<String>() + "leaf.c";
        let tree = FileTree::from_results(&[
            result(&path, Some("C"), 7),
            result("d0/side.c", Some("C"), 3),
        ]);

        for id in tree.pre_order() {
            let node = tree.node(id);
            if !node.is_leaf() {
                let sum: u64 = tree.children(id).map(|(_, child)| child.code).sum();
                assert_eq!(node.code, sum, "node {} does not sum its children", node.name);
            }
        }
        assert_eq!(tree.node(tree.root()).code, 10);
    }

    #[test]
    fn test_unsupported_files_have_no_language() {
        let tree = FileTree::from_results(&[
            result("src/main.js", Some("JavaScript"), 5),
            FileStats::unsupported(PathBuf::from("src/blob.bin")),
        ]);

        let src = child_named(&tree, tree.root(), "src");
        assert_eq!(tree.node(src).code, 5);
        assert_eq!(tree.ranked_languages(src), vec![("JavaScript", 5)]);

        let blob = child_named(&tree, src, "blob.bin");
        assert!(tree.node(blob).languages.is_empty());
    }

    #[test]
    fn test_sort_by_code_descending_and_stable() {
        let tree = FileTree::from_results(&[
            result("dir/a.js", Some("JavaScript"), 1),
            result("dir/b.js", Some("JavaScript"), 9),
            result("dir/c.js", Some("JavaScript"), 1),
            result("top.js", Some("JavaScript"), 4),
        ]);

        let top: Vec<_> = tree
            .children(tree.root())
            .map(|(_, n)| n.name.as_str())
            .collect();
        assert_eq!(top, vec!["dir", "top.js"]);

        let dir = child_named(&tree, tree.root(), "dir");
        let files: Vec<_> = tree.children(dir).map(|(_, n)| n.name.as_str()).collect();
        assert_eq!(files, vec!["b.js", "a.js", "c.js"]);
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(path_segments(Path::new("/home/a.go")), vec!["home", "a.go"]);
        assert_eq!(path_segments(Path::new("./src//b.rs")), vec!["src", "b.rs"]);
        assert_eq!(path_segments(Path::new("../x/c.py")), vec!["..", "x", "c.py"]);
    }

    #[test]
    fn test_full_path_and_report_key() {
        let tree = FileTree::build(&sample());
        let root = tree.root();
        let home = child_named(&tree, root, "home");
        let file1 = child_named(&tree, home, "file1.go");

        assert_eq!(tree.full_path(file1, "/"), "index/home/file1.go");
        assert_eq!(tree.full_path(root, "/"), "index");
        assert_eq!(tree.report_key(Some(root)), "index.html");
        assert_eq!(tree.report_key(Some(home)), "index-home.html");
        assert_eq!(tree.report_key(tree.node(root).parent), "index.html");
    }

    #[test]
    fn test_report_keys_are_distinct() {
        let tree = FileTree::from_results(&[
            result("a-b/x.js", Some("JavaScript"), 3),
            result("a/b/y.js", Some("JavaScript"), 2),
            result("a_-b/z.js", Some("JavaScript"), 1),
            result("a_/-b/w.js", Some("JavaScript"), 1),
        ]);

        let keys: Vec<String> = tree
            .pre_order()
            .into_iter()
            .filter(|&id| !tree.is_leaf(id))
            .map(|id| tree.report_key(Some(id)))
            .collect();
        let unique: std::collections::HashSet<&String> = keys.iter().collect();

        assert_eq!(unique.len(), keys.len(), "duplicate keys in {keys:?}");
        let a_b = child_named(&tree, tree.root(), "a-b");
        assert_eq!(tree.report_key(Some(a_b)), "index-a_-b.html");
        let a = child_named(&tree, tree.root(), "a");
        let b = child_named(&tree, a, "b");
        assert_eq!(tree.report_key(Some(b)), "index-a-b.html");
    }

    #[test]
    fn test_ranked_languages_ties_by_name() {
        let tree = FileTree::from_results(&[
            result("x/a.rb", Some("Ruby"), 5),
            result("x/b.go", Some("Golang"), 5),
            result("x/c.py", Some("Python"), 8),
        ]);

        assert_eq!(
            tree.ranked_languages(tree.root()),
            vec![("Python", 8), ("Golang", 5), ("Ruby", 5)]
        );
    }

    #[test]
    fn test_pre_order_follows_child_order() {
        let tree = FileTree::from_results(&sample());

        let names: Vec<_> = tree
            .pre_order()
            .into_iter()
            .map(|id| tree.node(id).name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["index", "home", "file2.java", "file1.go", "test", "file3.py"]
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = FileTree::from_results(&Vec::<FileStats>::new());

        assert!(tree.is_empty());
        assert_eq!(tree.node(tree.root()).code, 0);
        assert!(tree.is_leaf(tree.root()));
    }
}
