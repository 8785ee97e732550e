//! Built-in language table.

use super::registry::LanguageSpec;

const C_STYLE: &[(&str, &str)] = &[("/*", "*/")];
const MARKUP: &[(&str, &str)] = &[("<!--", "-->")];

/// Languages known without an override document, in lookup order.
pub(crate) fn builtin_languages() -> Vec<(&'static str, LanguageSpec)> {
    vec![
        ("ActionScript", LanguageSpec::new(&["//"], C_STYLE, &[".as"])),
        (
            "Abap",
            LanguageSpec::new(&["\""], C_STYLE, &[".abap", ".ab4", ".flow"]),
        ),
        ("Apex", LanguageSpec::new(&["//"], C_STYLE, &[".cls", ".trigger"])),
        ("C", LanguageSpec::new(&["//"], C_STYLE, &[".c"])),
        ("C Header", LanguageSpec::new(&["//"], C_STYLE, &[".h"])),
        (
            "C++",
            LanguageSpec::new(&["//"], C_STYLE, &[".cpp", ".cc", ".cxx", ".c++"]),
        ),
        (
            "C++ Header",
            LanguageSpec::new(&["//"], C_STYLE, &[".hh", ".hpp", ".hxx", ".h++", ".ipp"]),
        ),
        (
            "COBOL",
            LanguageSpec::new(&["*", "/"], &[], &[".cbl", ".ccp", ".cob", ".cobol", ".cpy"]),
        ),
        ("C#", LanguageSpec::new(&["//"], C_STYLE, &[".cs"])),
        ("CSS", LanguageSpec::new(&["//"], C_STYLE, &[".css"])),
        ("Golang", LanguageSpec::new(&["//"], C_STYLE, &[".go"])),
        (
            "HTML",
            LanguageSpec::new(
                &[],
                MARKUP,
                &[
                    ".html", ".htm", ".cshtml", ".vbhtml", ".aspx", ".ascx", ".rhtml", ".erb",
                    ".shtml", ".shtm", ".cmp",
                ],
            ),
        ),
        ("Java", LanguageSpec::new(&["//"], C_STYLE, &[".java", ".jav"])),
        (
            "JavaScript",
            LanguageSpec::new(
                &["//"],
                C_STYLE,
                &[".js", ".jsx", ".jsp", ".jspx", ".jspf", ".mjs"],
            ),
        ),
        ("Kotlin", LanguageSpec::new(&["//"], C_STYLE, &[".kt", ".kts"])),
        (
            "PHP",
            LanguageSpec::new(
                &["//", "#"],
                C_STYLE,
                &[".php", ".php3", ".php4", ".php5", ".phtml", ".inc"],
            ),
        ),
        ("Objective-C", LanguageSpec::new(&["//"], C_STYLE, &[".m"])),
        ("Oracle PL/SQL", LanguageSpec::new(&["--"], C_STYLE, &[".pkb"])),
        ("PL/I", LanguageSpec::new(&["--"], C_STYLE, &[".pl1"])),
        (
            "Python",
            LanguageSpec::new(
                &["#"],
                &[("\"\"\"", "\"\"\"")],
                &[".py", ".python", ".ipynb"],
            ),
        ),
        ("RPG", LanguageSpec::new(&["#"], &[], &[".rpg"])),
        ("Ruby", LanguageSpec::new(&["#"], &[("=begin", "=end")], &[".rb"])),
        ("Scala", LanguageSpec::new(&["//"], C_STYLE, &[".scala"])),
        ("Scss", LanguageSpec::new(&["//"], C_STYLE, &[".scss"])),
        ("SQL", LanguageSpec::new(&["--"], C_STYLE, &[".sql"])),
        ("Swift", LanguageSpec::new(&["//"], C_STYLE, &[".swift"])),
        ("TypeScript", LanguageSpec::new(&["//"], C_STYLE, &[".ts", ".tsx"])),
        ("T-SQL", LanguageSpec::new(&["--"], &[], &[".tsql"])),
        ("Vue", LanguageSpec::new(&["<!--"], MARKUP, &[".vue"])),
        ("Visual Basic .NET", LanguageSpec::new(&["'"], &[], &[".vb"])),
        (
            "XML",
            LanguageSpec::new(&["<!--"], MARKUP, &[".xml", ".xsd", ".xsl"]),
        ),
        ("XHTML", LanguageSpec::new(&["<!--"], MARKUP, &[".xhtml"])),
        ("YAML", LanguageSpec::new(&["#"], &[], &[".yaml", ".yml"])),
        ("Terraform", LanguageSpec::new(&[], &[], &[".tf"])),
        ("JCL", LanguageSpec::new(&["//"], C_STYLE, &[".jcl"])),
        (
            "Docker",
            LanguageSpec::new(&["#"], &[], &[".dockerfile"]).with_file_names(&["Dockerfile"]),
        ),
    ]
}
