/// Builtin language identifiers, in display order.
///
/// Some entries have no engine yet (`pgp`, `django`, `maths`, `sass`,
/// `latex`, `text`, `vue`). They stay listed and resolve to nothing.
pub const CATALOG: &[&str] = &[
    "apl",
    "pgp",
    "asn",
    "cmake",
    "c",
    "c++",
    "objective-c",
    "kotlin",
    "scala",
    "c#",
    "java",
    "cobol",
    "coffescript",
    "lisp",
    "css/scss",
    "django",
    "dart",
    "dockerfile",
    "erlang",
    "fortran",
    "go",
    "groovy",
    "haskell",
    "html",
    "http",
    "javascript",
    "typescript",
    "json",
    "ecma",
    "jinja",
    "lua",
    "markdown",
    "maths",
    "ntriples",
    "pascal",
    "perl",
    "php",
    "powershell",
    "properties",
    "protobuf",
    "python",
    "r",
    "ruby",
    "rust",
    "sass",
    "scheme",
    "shell",
    "sql",
    "sqlite",
    "sparql",
    "mysql",
    "latex",
    "swift",
    "text",
    "toml",
    "turtle",
    "vb",
    "vue",
    "xml",
    "yaml",
];
