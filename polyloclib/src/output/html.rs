//! Hierarchical HTML report.
//!
//! Every directory node of a [`FileTree`] becomes one static page listing
//! its immediate children with their code counts, plus a per-language
//! breakdown. Pages link to each other by [`FileTree::report_key`] and
//! reference two SVG icons that must sit next to them ([`SVG_ASSETS`]).

use std::fmt::Write;
use std::path::MAIN_SEPARATOR_STR;

use crate::query::{FileTree, NodeId};

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlReport {
    /// File name relative to the report directory
    pub file_name: String,
    /// Full HTML document
    pub content: String,
}

const FILE_ICON: &str = "file-text.svg";
const FOLDER_ICON: &str = "folder.svg";

const PAGE_HEAD: &str = "<!DOCTYPE html><html lang='en'><head><meta charset='UTF-8'>\
<style>body{font-family:Arial,sans-serif}td{padding:8px;border-bottom:1px solid #ddd}\
th{background-color:#f2f2f2;padding:8px}a{color:#00f;text-decoration:none}\
a:hover{text-decoration:underline}.code-line-count{padding:8px;border-bottom:1px solid #ddd}\
.file,.folder{padding:10px;display:inline-block;width:20px;vertical-align:middle}</style>\
<meta name='viewport' content='width=device-width,initial-scale=1'>\
<title>File Tree Report</title></head><body><h1>File Tree Report</h1>";

/// Render one page per directory, root first, in depth-first order.
///
/// Call on an aggregated and sorted tree ([`FileTree::from_results`]). A
/// tree without files yields no pages.
pub fn render_reports(tree: &FileTree) -> Vec<HtmlReport> {
    tree.pre_order()
        .into_iter()
        .filter(|&id| !tree.is_leaf(id))
        .map(|id| HtmlReport {
            file_name: tree.report_key(Some(id)),
            content: render_page(tree, id),
        })
        .collect()
}

/// Render the page for one directory node.
pub fn render_page(tree: &FileTree, id: NodeId) -> String {
    let node = tree.node(id);
    let mut html = String::from(PAGE_HEAD);

    // fmt::Write into a String never fails.
    let _ = write!(
        html,
        "<p><b>Current Path:</b><a href='{}'> '{}' </a>\
         <span style='color:gray;'>&lAarr; Click to return</span></p>",
        escape_html(&tree.report_key(node.parent)),
        escape_html(&tree.full_path(id, MAIN_SEPARATOR_STR)),
    );

    html.push_str("<table><thead><tr><th>File Name</th><th>Code Line Count</th></tr></thead><tbody>");
    for (child_id, child) in tree.children(id) {
        html.push_str("<tr><td>");
        if child.is_leaf() {
            let _ = write!(
                html,
                "<img src='{FILE_ICON}' alt='' class='file'> <span>{}</span>",
                escape_html(&child.name)
            );
        } else {
            let _ = write!(
                html,
                "<img src='{FOLDER_ICON}' alt='' class='folder'> <a href='./{}'>{}</a>",
                escape_html(&tree.report_key(Some(child_id))),
                escape_html(&child.name)
            );
        }
        let _ = write!(html, "</td><td class='code-line-count'>{}</td></tr>", child.code);
    }
    html.push_str("</tbody>");
    push_total_footer(&mut html, node.code);
    html.push_str("</table>");

    html.push_str("<h2>Language Statistics</h2>");
    html.push_str("<table><thead><tr><th>Language</th><th>Code Line Count</th></tr></thead><tbody>");
    for (language, count) in tree.ranked_languages(id) {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{count}</td></tr>",
            escape_html(language)
        );
    }
    html.push_str("</tbody>");
    push_total_footer(&mut html, node.code);
    html.push_str("</table></body></html>");

    html
}

fn push_total_footer(html: &mut String, code: u64) {
    let _ = write!(
        html,
        "<tfoot><tr><th>Total Code Lines:</th><th class='code-line-count'>{code}</th></tr></tfoot>"
    );
}

/// Escape text for use in HTML content and single- or double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Icons referenced by every page, as `(file name, SVG document)`.
pub const SVG_ASSETS: [(&str, &str); 2] = [(FILE_ICON, FILE_TEXT_SVG), (FOLDER_ICON, FOLDER_SVG)];

const FILE_TEXT_SVG: &str = r#"<svg width='800px' height='800px' viewBox='0 0 24 24' fill='none' xmlns='http://www.w3.org/2000/svg'><path d='M15.3929 4.05365L14.8912 4.61112L15.3929 4.05365ZM19.3517 7.61654L18.85 8.17402L19.3517 7.61654ZM21.654 10.1541L20.9689 10.4592V10.4592L21.654 10.1541ZM3.17157 20.8284L3.7019 20.2981H3.7019L3.17157 20.8284ZM20.8284 20.8284L20.2981 20.2981L20.2981 20.2981L20.8284 20.8284ZM14 21.25H10V22.75H14V21.25ZM2.75 14V10H1.25V14H2.75ZM21.25 13.5629V14H22.75V13.5629H21.25ZM14.8912 4.61112L18.85 8.17402L19.8534 7.05907L15.8947 3.49618L14.8912 4.61112ZM22.75 13.5629C22.75 11.8745 22.7651 10.8055 22.3391 9.84897L20.9689 10.4592C21.2349 11.0565 21.25 11.742 21.25 13.5629H22.75ZM18.85 8.17402C20.2034 9.3921 20.7029 9.86199 20.9689 10.4592L22.3391 9.84897C21.9131 8.89241 21.1084 8.18853 19.8534 7.05907L18.85 8.17402ZM10.0298 2.75C11.6116 2.75 12.2085 2.76158 12.7405 2.96573L13.2779 1.5653C12.4261 1.23842 11.498 1.25 10.0298 1.25V2.75ZM15.8947 3.49618C14.8087 2.51878 14.1297 1.89214 13.2779 1.5653L12.7405 2.96573C13.2727 3.16993 13.7215 3.55836 14.8912 4.61112L15.8947 3.49618ZM10 21.25C8.09318 21.25 6.73851 21.2484 5.71085 21.1102C4.70476 20.975 4.12511 20.7213 3.7019 20.2981L2.64124 21.3588C3.38961 22.1071 4.33855 22.4392 5.51098 22.5969C6.66182 22.7516 8.13558 22.75 10 22.75V21.25ZM1.25 14C1.25 15.8644 1.24841 17.3382 1.40313 18.489C1.56076 19.6614 1.89288 20.6104 2.64124 21.3588L3.7019 20.2981C3.27869 19.8749 3.02502 19.2952 2.88976 18.2892C2.75159 17.2615 2.75 15.9068 2.75 14H1.25ZM14 22.75C15.8644 22.75 17.3382 22.7516 18.489 22.5969C19.6614 22.4392 20.6104 22.1071 21.3588 21.3588L20.2981 20.2981C19.8749 20.7213 19.2952 20.975 18.2892 21.1102C17.2615 21.2484 15.9068 21.25 14 21.25V22.75ZM21.25 14C21.25 15.9068 21.2484 17.2615 21.1102 18.2892C20.975 19.2952 20.7213 19.8749 20.2981 20.2981L21.3588 21.3588C22.1071 20.6104 22.4392 19.6614 22.5969 18.489C22.7516 17.3382 22.75 15.8644 22.75 14H21.25ZM2.75 10C2.75 8.09318 2.75159 6.73851 2.88976 5.71085C3.02502 4.70476 3.27869 4.12511 3.7019 3.7019L2.64124 2.64124C1.89288 3.38961 1.56076 4.33855 1.40313 5.51098C1.24841 6.66182 1.25 8.13558 1.25 10H2.75ZM10.0298 1.25C8.15538 1.25 6.67442 1.24842 5.51887 1.40307C4.34232 1.56054 3.39019 1.8923 2.64124 2.64124L3.7019 3.7019C4.12453 3.27928 4.70596 3.02525 5.71785 2.88982C6.75075 2.75158 8.11311 2.75 10.0298 2.75V1.25Z' fill='#1C274C'/><path opacity='0.5' d='M6 14.5H14' stroke='#1C274C' stroke-width='1.5' stroke-linecap='round'/><path opacity='0.5' d='M6 18H11.5' stroke='#1C274C' stroke-width='1.5' stroke-linecap='round'/><path opacity='0.5' d='M13 2.5V5C13 7.35702 13 8.53553 13.7322 9.26777C14.4645 10 15.643 10 18 10H22' stroke='#1C274C' stroke-width='1.5'/></svg>"#;

const FOLDER_SVG: &str = r#"<?xml version='1.0' encoding='iso-8859-1'?> <!-- Uploaded to: SVG Repo, www.svgrepo.com, Generator: SVG Repo Mixer Tools --> <svg version='1.1' id='Layer_1' xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' viewBox='0 0 512 512' xml:space='preserve'><path id='SVGCleanerId_0' style='fill:#ffc36e' d='M183.295,123.586H55.05c-6.687,0-12.801-3.778-15.791-9.76l-12.776-25.55	l12.776-25.55c2.99-5.982,9.103-9.76,15.791-9.76h128.246c6.687,0,12.801,3.778,15.791,9.76l12.775,25.55l-12.776,25.55	C196.096,119.808,189.983,123.586,183.295,123.586z'/><g><path id='SVGCleanerId_0_1_' style='fill:#ffc36e' d='M183.295,123.586H55.05c-6.687,0-12.801-3.778-15.791-9.76l-12.776-25.55l12.776-25.55c2.99-5.982,9.103-9.76,15.791-9.76h128.246c6.687,0,12.801,3.778,15.791,9.76l12.775,25.55l-12.776,25.55C196.096,119.808,189.983,123.586,183.295,123.586z'/></g><path style='fill:#eff2fa' d='M485.517,70.621H26.483c-4.875,0-8.828,3.953-8.828,8.828v44.138h476.69V79.448	C494.345,74.573,490.392,70.621,485.517,70.621z'/><rect x='17.655' y='105.931' style='fill:#e1e6f2' width='476.69' height='17.655'/><path style='fill:#ffd782' d='M494.345,88.276H217.318c-3.343,0-6.4,1.889-7.895,4.879l-10.336,20.671	c-2.99,5.982-9.105,9.76-15.791,9.76H55.05c-6.687,0-12.801-3.778-15.791-9.76L28.922,93.155c-1.495-2.99-4.552-4.879-7.895-4.879	h-3.372C7.904,88.276,0,96.18,0,105.931v335.448c0,9.751,7.904,17.655,17.655,17.655h476.69c9.751,0,17.655-7.904,17.655-17.655	V105.931C512,96.18,504.096,88.276,494.345,88.276z'/><path style='fill:#ffc36e' d='M485.517,441.379H26.483c-4.875,0-8.828-3.953-8.828-8.828l0,0c0-4.875,3.953-8.828,8.828-8.828	h459.034c4.875,0,8.828,3.953,8.828,8.828l0,0C494.345,437.427,490.392,441.379,485.517,441.379z'/><path style='fill:#eff2fa' d='M326.621,220.69h132.414c4.875,0,8.828-3.953,8.828-8.828v-70.621c0-4.875-3.953-8.828-8.828-8.828	H326.621c-4.875,0-8.828,3.953-8.828,8.828v70.621C317.793,216.737,321.746,220.69,326.621,220.69z'/><path style='fill:#c7cfe2' d='M441.379,167.724h-97.103c-4.875,0-8.828-3.953-8.828-8.828l0,0c0-4.875,3.953-8.828,8.828-8.828	h97.103c4.875,0,8.828,3.953,8.828,8.828l0,0C450.207,163.772,446.254,167.724,441.379,167.724z'/><path style='fill:#d7deed' d='M441.379,203.034h-97.103c-4.875,0-8.828-3.953-8.828-8.828l0,0c0-4.875,3.953-8.828,8.828-8.828	h97.103c4.875,0,8.828,3.953,8.828,8.828l0,0C450.207,199.082,446.254,203.034,441.379,203.034z'/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FileStats, Locs};
    use std::path::PathBuf;

    fn result(path: &str, language: &str, code: u64) -> FileStats {
        FileStats::new(
            PathBuf::from(path),
            Some(language.to_string()),
            Locs {
                code,
                comments: 0,
                blanks: 0,
                total: code,
            },
        )
    }

    fn sample_tree() -> FileTree {
        FileTree::from_results(&[
            result("home/file1.go", "Golang", 10),
            result("home/file2.java", "Java", 20),
            result("test/file3.py", "Python", 30),
        ])
    }

    #[test]
    fn test_one_page_per_directory() {
        let reports = render_reports(&sample_tree());
        let names: Vec<_> = reports.iter().map(|r| r.file_name.as_str()).collect();

        assert_eq!(names, vec!["index.html", "index-home.html", "index-test.html"]);
    }

    #[test]
    fn test_root_page_contents() {
        let reports = render_reports(&sample_tree());
        let root = &reports[0].content;

        assert!(root.starts_with("<!DOCTYPE html>"));
        assert!(root.ends_with("</body></html>"));
        assert!(root.contains("<a href='index.html'> 'index' </a>"));
        assert!(root.contains("<a href='./index-home.html'>home</a>"));
        assert!(root.contains("<a href='./index-test.html'>test</a>"));
        assert!(root.contains("<th class='code-line-count'>60</th>"));
        assert!(root.contains("<tr><td>Python</td><td>30</td></tr>"));
    }

    #[test]
    fn test_directory_page_lists_files_by_code() {
        let reports = render_reports(&sample_tree());
        let home = &reports[1].content;

        let file2 = home.find("file2.java").unwrap();
        let file1 = home.find("file1.go").unwrap();
        assert!(file2 < file1);
        assert!(home.contains("<img src='file-text.svg' alt='' class='file'> <span>file1.go</span>"));
        assert!(home.contains("<a href='index.html'>"));

        let java = home.find("<td>Java</td>").unwrap();
        let golang = home.find("<td>Golang</td>").unwrap();
        assert!(java < golang);
    }

    #[test]
    fn test_names_are_escaped() {
        let tree = FileTree::from_results(&[result("a<b>/x&y.js", "Java<Script>", 1)]);

        let reports = render_reports(&tree);
        let dir = &reports[1];

        assert_eq!(reports[0].file_name, "index.html");
        assert_eq!(dir.file_name, "index-a<b>.html");
        assert!(reports[0].content.contains("<a href='./index-a&lt;b&gt;.html'>a&lt;b&gt;</a>"));
        assert!(dir.content.contains("<span>x&amp;y.js</span>"));
        assert!(dir.content.contains("<td>Java&lt;Script&gt;</td>"));
        assert!(!dir.content.contains("<b>/"));
    }

    #[test]
    fn test_empty_tree_has_no_pages() {
        let tree = FileTree::from_results(&Vec::<FileStats>::new());

        assert!(render_reports(&tree).is_empty());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("<a href=\"x\">'&'</a>"), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_svg_assets() {
        assert_eq!(SVG_ASSETS[0].0, "file-text.svg");
        assert_eq!(SVG_ASSETS[1].0, "folder.svg");
        for (_, svg) in SVG_ASSETS {
            assert!(svg.contains("<svg"));
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }
}
