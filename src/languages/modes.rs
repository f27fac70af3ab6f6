//! Builtin stream modes.
//!
//! Each mode is an approximation of the corresponding legacy editor mode:
//! comment markers, string delimiters and the word lists that matter most
//! for highlighting.

use crate::engine::StreamMode;

const LISP_IDENTIFIER: &str = r"[A-Za-z_+\-*/<>=!?&%$#][A-Za-z0-9_+\-*/<>=!?&%$#.:]*";

fn clike(name: &str) -> StreamMode {
    StreamMode::new(name)
        .line_comment(&["//"])
        .block_comment("/*", "*/")
        .strings(&["\"", "'"])
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

pub fn apl() -> StreamMode {
    StreamMode::new("apl")
        .line_comment(&["⍝"])
        .strings(&["'"])
        .escape(None)
        .identifier(r"[A-Za-z_∆⍙⎕][A-Za-z0-9_∆⍙¯]*")
        .operators("+-×÷⌈⌊∣|⍳?*⍟○!⌹<≤=≥>≠≡≢∊⍷∪∩~∨∧⍱⍲⍴,⍪⌽⊖⍉↑↓⊂⊃⌷⍋⍒⊤⊥⍕⍎⊣⊢⍨¨⍣∘/\\⌿⍀←→")
        .builtins(&["⎕IO", "⎕ML", "⎕CT", "⎕PP"])
}

pub fn asn1() -> StreamMode {
    StreamMode::new("asn.1")
        .line_comment(&["--"])
        .strings(&["\""])
        .identifier(r"[A-Za-z][A-Za-z0-9-]*")
        .keywords(&[
            "DEFINITIONS", "BEGIN", "END", "IMPORTS", "EXPORTS", "FROM", "SEQUENCE", "SET",
            "CHOICE", "OF", "OPTIONAL", "DEFAULT", "SIZE", "IDENTIFIER", "COMPONENTS",
            "EXPLICIT", "IMPLICIT", "TAGS", "AUTOMATIC",
        ])
        .builtins(&[
            "INTEGER", "BOOLEAN", "OCTET", "STRING", "BIT", "NULL", "ENUMERATED", "REAL",
            "OBJECT", "UTF8String", "IA5String", "PrintableString",
        ])
        .atoms(&["TRUE", "FALSE", "MIN", "MAX"])
}

pub fn cmake() -> StreamMode {
    StreamMode::new("cmake")
        .block_comment("#[[", "]]")
        .line_comment(&["#"])
        .strings(&["\""])
        .case_insensitive()
        .keywords(&[
            "if", "else", "elseif", "endif", "foreach", "endforeach", "while", "endwhile",
            "function", "endfunction", "macro", "endmacro", "return",
        ])
        .builtins(&[
            "set", "project", "add_executable", "add_library", "target_link_libraries",
            "target_include_directories", "include", "find_package", "message", "option",
            "cmake_minimum_required", "install", "add_subdirectory",
        ])
        .atoms(&["on", "off", "true", "false", "yes", "no"])
}

pub fn c() -> StreamMode {
    clike("c")
        .keywords(C_KEYWORDS)
        .atoms(&["NULL", "true", "false"])
        .builtins(&["size_t", "ssize_t", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t",
            "uint16_t", "uint32_t", "uint64_t", "bool", "FILE"])
}

pub fn objective_c() -> StreamMode {
    let mut keywords = C_KEYWORDS.to_vec();
    keywords.extend([
        "@interface", "@implementation", "@end", "@property", "@protocol", "@class",
        "@synthesize", "@selector", "@autoreleasepool", "self", "super", "id", "instancetype",
    ]);

    clike("objectivec")
        .identifier(r"@?[A-Za-z_][A-Za-z0-9_]*")
        .keywords(&keywords)
        .atoms(&["YES", "NO", "nil", "Nil", "NULL"])
}

pub fn kotlin() -> StreamMode {
    clike("kotlin")
        .strings(&["\"", "'"])
        .raw_strings(&["\"\"\""])
        .keywords(&[
            "package", "import", "class", "interface", "fun", "val", "var", "if", "else", "when",
            "for", "while", "do", "return", "break", "continue", "object", "companion", "data",
            "sealed", "open", "override", "private", "public", "protected", "internal",
            "abstract", "final", "in", "is", "as", "try", "catch", "finally", "throw", "this",
            "super", "typealias", "suspend", "enum", "lateinit", "inline",
        ])
        .atoms(&["true", "false", "null"])
}

pub fn scala() -> StreamMode {
    clike("scala")
        .strings(&["\"", "'"])
        .raw_strings(&["\"\"\""])
        .keywords(&[
            "abstract", "case", "catch", "class", "def", "do", "else", "extends", "final",
            "finally", "for", "forSome", "if", "implicit", "import", "lazy", "match", "new",
            "object", "override", "package", "private", "protected", "return", "sealed",
            "super", "this", "throw", "trait", "try", "type", "val", "var", "while", "with",
            "yield",
        ])
        .atoms(&["true", "false", "null"])
}

pub fn csharp() -> StreamMode {
    clike("csharp")
        .keywords(&[
            "abstract", "as", "base", "break", "case", "catch", "checked", "class", "const",
            "continue", "default", "delegate", "do", "else", "enum", "event", "explicit",
            "extern", "finally", "fixed", "for", "foreach", "goto", "if", "implicit", "in",
            "interface", "internal", "is", "lock", "namespace", "new", "operator", "out",
            "override", "params", "private", "protected", "public", "readonly", "ref",
            "return", "sealed", "sizeof", "stackalloc", "static", "struct", "switch", "this",
            "throw", "try", "typeof", "unchecked", "unsafe", "using", "virtual", "void",
            "volatile", "while", "async", "await", "var", "get", "set",
        ])
        .builtins(&[
            "bool", "byte", "char", "decimal", "double", "float", "int", "long", "object",
            "sbyte", "short", "string", "uint", "ulong", "ushort", "dynamic",
        ])
        .atoms(&["true", "false", "null"])
}

pub fn cobol() -> StreamMode {
    StreamMode::new("cobol")
        .line_comment(&["*>"])
        .strings(&["\"", "'"])
        .escape(None)
        .case_insensitive()
        .identifier(r"[A-Za-z][A-Za-z0-9-]*")
        .keywords(&[
            "identification", "division", "program-id", "procedure", "data", "working-storage",
            "section", "environment", "configuration", "file", "fd", "pic", "picture", "value",
            "move", "to", "display", "accept", "perform", "until", "varying", "if", "else",
            "end-if", "evaluate", "when", "end-evaluate", "stop", "run", "compute", "add",
            "subtract", "multiply", "divide", "giving", "call", "using", "end-perform",
        ])
        .atoms(&[
            "zero", "zeros", "zeroes", "space", "spaces", "high-values", "low-values", "true",
            "false",
        ])
}

pub fn coffeescript() -> StreamMode {
    StreamMode::new("coffeescript")
        .block_comment("###", "###")
        .line_comment(&["#"])
        .strings(&["\"\"\"", "'''", "\"", "'", "`"])
        .keywords(&[
            "if", "else", "unless", "then", "for", "in", "of", "while", "until", "loop",
            "return", "break", "continue", "switch", "when", "try", "catch", "finally", "throw",
            "class", "extends", "new", "do", "by", "and", "or", "not", "is", "isnt", "super",
            "this",
        ])
        .atoms(&["true", "false", "null", "undefined", "yes", "no", "on", "off"])
}

pub fn common_lisp() -> StreamMode {
    StreamMode::new("commonlisp")
        .block_comment("#|", "|#")
        .line_comment(&[";"])
        .strings(&["\""])
        .identifier(LISP_IDENTIFIER)
        .operators("'`,@")
        .keywords(&[
            "defun", "defmacro", "defvar", "defparameter", "defclass", "defmethod", "let",
            "let*", "lambda", "if", "cond", "when", "unless", "progn", "loop", "do", "dolist",
            "dotimes", "setf", "setq", "quote", "function", "return-from", "block", "case",
        ])
        .atoms(&["t", "nil"])
}

pub fn dart() -> StreamMode {
    clike("dart")
        .strings(&["'''", "\"\"\"", "'", "\""])
        .keywords(&[
            "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class",
            "const", "continue", "default", "deferred", "do", "dynamic", "else", "enum",
            "export", "extends", "external", "factory", "final", "finally", "for", "get", "if",
            "implements", "import", "in", "is", "library", "new", "operator", "part",
            "rethrow", "return", "set", "static", "super", "switch", "sync", "this", "throw",
            "try", "typedef", "var", "void", "while", "with", "yield", "late", "required",
        ])
        .atoms(&["true", "false", "null"])
}

pub fn dockerfile() -> StreamMode {
    StreamMode::new("dockerfile")
        .line_comment(&["#"])
        .strings(&["\"", "'"])
        .case_insensitive()
        .keywords(&[
            "from", "run", "cmd", "label", "maintainer", "expose", "env", "add", "copy",
            "entrypoint", "volume", "user", "workdir", "arg", "onbuild", "stopsignal",
            "healthcheck", "shell", "as",
        ])
}

pub fn erlang() -> StreamMode {
    StreamMode::new("erlang")
        .line_comment(&["%"])
        .strings(&["\"", "'"])
        .keywords(&[
            "after", "and", "andalso", "band", "begin", "bnot", "bor", "bsl", "bsr", "bxor",
            "case", "catch", "cond", "div", "end", "fun", "if", "let", "not", "of", "or",
            "orelse", "receive", "rem", "try", "when", "xor",
        ])
        .builtins(&["module", "export", "import", "spawn", "self", "record", "define"])
        .atoms(&["true", "false", "ok", "undefined"])
}

pub fn fortran() -> StreamMode {
    StreamMode::new("fortran")
        .line_comment(&["!"])
        .strings(&["\"", "'"])
        .escape(None)
        .case_insensitive()
        .keywords(&[
            "program", "end", "subroutine", "function", "module", "use", "implicit", "none",
            "parameter", "dimension", "allocatable", "if", "then", "else", "elseif", "endif",
            "do", "enddo", "while", "call", "return", "stop", "contains", "type", "select",
            "case", "print", "write", "read", "intent", "in", "out", "inout",
        ])
        .builtins(&[
            "integer", "real", "double", "precision", "complex", "logical", "character",
            "allocate", "deallocate", "size", "abs", "sqrt", "mod",
        ])
}

pub fn go() -> StreamMode {
    clike("go")
        .strings(&["\"", "'"])
        .raw_strings(&["`"])
        .keywords(&[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
            "package", "range", "return", "select", "struct", "switch", "type", "var",
        ])
        .atoms(&["true", "false", "nil", "iota"])
        .builtins(&[
            "append", "cap", "close", "complex", "copy", "delete", "imag", "len", "make", "new",
            "panic", "print", "println", "real", "recover", "bool", "byte", "rune", "string",
            "error", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
            "uint32", "uint64", "uintptr", "float32", "float64", "any",
        ])
}

pub fn groovy() -> StreamMode {
    clike("groovy")
        .strings(&["'''", "\"\"\"", "\"", "'"])
        .keywords(&[
            "abstract", "as", "assert", "boolean", "break", "byte", "case", "catch", "char",
            "class", "const", "continue", "def", "default", "do", "double", "else", "enum",
            "extends", "final", "finally", "float", "for", "goto", "if", "implements",
            "import", "in", "instanceof", "int", "interface", "long", "native", "new",
            "package", "private", "protected", "public", "return", "short", "static",
            "strictfp", "super", "switch", "synchronized", "this", "threadsafe", "throw",
            "throws", "transient", "try", "void", "volatile", "while",
        ])
        .atoms(&["true", "false", "null"])
}

pub fn haskell() -> StreamMode {
    StreamMode::new("haskell")
        .block_comment("{-", "-}")
        .line_comment(&["--"])
        .strings(&["\"", "'"])
        .identifier(r"[A-Za-z_][A-Za-z0-9_']*")
        .operators("+-*/%=<>!&|^~?:.$@\\")
        .keywords(&[
            "case", "class", "data", "default", "deriving", "do", "else", "foreign", "if",
            "import", "in", "infix", "infixl", "infixr", "instance", "let", "module",
            "newtype", "of", "then", "type", "where", "qualified", "as", "hiding",
        ])
        .atoms(&["True", "False", "Nothing", "Just", "Left", "Right"])
}

pub fn http() -> StreamMode {
    StreamMode::new("http")
        .identifier(r"[A-Za-z][A-Za-z0-9-]*")
        .operators(":/")
        .keywords(&[
            "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "CONNECT", "TRACE",
        ])
        .builtins(&["HTTP"])
}

pub fn typescript() -> StreamMode {
    clike("typescript")
        .strings(&["`", "\"", "'"])
        .keywords(&[
            "break", "case", "catch", "class", "const", "continue", "debugger", "default",
            "delete", "do", "else", "export", "extends", "finally", "for", "function", "if",
            "import", "in", "instanceof", "let", "new", "return", "super", "switch", "this",
            "throw", "try", "typeof", "var", "void", "while", "with", "yield", "async",
            "await", "interface", "type", "enum", "implements", "namespace", "declare",
            "abstract", "public", "private", "protected", "readonly", "as", "keyof", "of",
            "from",
        ])
        .atoms(&["true", "false", "null", "undefined", "NaN", "Infinity"])
        .builtins(&[
            "string", "number", "boolean", "any", "unknown", "never", "object", "symbol",
            "bigint",
        ])
}

pub fn jinja2() -> StreamMode {
    StreamMode::new("jinja2")
        .block_comment("{#", "#}")
        .strings(&["\"", "'"])
        .keywords(&[
            "block", "endblock", "extends", "include", "import", "from", "for", "endfor", "if",
            "elif", "else", "endif", "macro", "endmacro", "set", "with", "endwith", "filter",
            "endfilter", "call", "endcall", "raw", "endraw", "in", "is", "not", "and", "or",
        ])
        .atoms(&["true", "false", "none", "True", "False", "None"])
}

pub fn lua() -> StreamMode {
    StreamMode::new("lua")
        .block_comment("--[[", "]]")
        .line_comment(&["--"])
        .strings(&["\"", "'"])
        .keywords(&[
            "and", "break", "do", "else", "elseif", "end", "for", "function", "goto", "if",
            "in", "local", "not", "or", "repeat", "return", "then", "until", "while",
        ])
        .atoms(&["true", "false", "nil"])
        .builtins(&[
            "print", "pairs", "ipairs", "require", "type", "tostring", "tonumber",
            "setmetatable", "getmetatable", "pcall", "error", "table", "string", "math",
        ])
}

pub fn ntriples() -> StreamMode {
    StreamMode::new("ntriples")
        .line_comment(&["#"])
        .strings(&["\""])
        .identifier(r"_:[A-Za-z0-9_]+|[A-Za-z][A-Za-z0-9_-]*")
        .operators("<>^@.")
}

pub fn pascal() -> StreamMode {
    StreamMode::new("pascal")
        .line_comment(&["//"])
        .block_comment("(*", "*)")
        .block_comment("{", "}")
        .strings(&["'"])
        .escape(None)
        .case_insensitive()
        .keywords(&[
            "and", "array", "begin", "case", "const", "div", "do", "downto", "else", "end",
            "file", "for", "function", "goto", "if", "in", "label", "mod", "not", "of", "or",
            "packed", "procedure", "program", "record", "repeat", "set", "then", "to", "type",
            "until", "var", "while", "with", "uses", "unit", "interface", "implementation",
        ])
        .atoms(&["true", "false", "nil"])
}

pub fn perl() -> StreamMode {
    StreamMode::new("perl")
        .line_comment(&["#"])
        .strings(&["\"", "'", "`"])
        .identifier(r"[$@%]?[A-Za-z_][A-Za-z0-9_]*")
        .keywords(&[
            "my", "our", "local", "sub", "if", "elsif", "else", "unless", "while", "until",
            "for", "foreach", "do", "last", "next", "redo", "return", "use", "require",
            "package", "no", "and", "or", "not", "eq", "ne", "lt", "gt", "le", "ge", "cmp",
        ])
        .builtins(&[
            "print", "printf", "say", "chomp", "split", "join", "push", "pop", "shift",
            "unshift", "keys", "values", "defined", "undef", "die", "warn", "open", "close",
        ])
}

pub fn powershell() -> StreamMode {
    StreamMode::new("powershell")
        .block_comment("<#", "#>")
        .line_comment(&["#"])
        .strings(&["\"", "'"])
        .escape(Some('`'))
        .case_insensitive()
        .identifier(r"\$?[A-Za-z_][A-Za-z0-9_-]*")
        .keywords(&[
            "begin", "break", "catch", "class", "continue", "data", "do", "dynamicparam",
            "else", "elseif", "end", "exit", "filter", "finally", "for", "foreach", "function",
            "if", "in", "param", "process", "return", "switch", "throw", "trap", "try",
            "until", "using", "var", "while",
        ])
        .atoms(&["$true", "$false", "$null"])
}

pub fn properties() -> StreamMode {
    StreamMode::new("properties")
        .line_comment(&["#", "!"])
        .identifier(r"[A-Za-z_][A-Za-z0-9_.-]*")
        .operators("=:")
}

pub fn protobuf() -> StreamMode {
    clike("protobuf")
        .keywords(&[
            "syntax", "package", "import", "option", "message", "enum", "service", "rpc",
            "returns", "stream", "oneof", "map", "reserved", "repeated", "optional",
            "required", "extend", "to", "max",
        ])
        .builtins(&[
            "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64",
            "fixed32", "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
        ])
        .atoms(&["true", "false"])
}

pub fn r() -> StreamMode {
    StreamMode::new("r")
        .line_comment(&["#"])
        .strings(&["\"", "'", "`"])
        .identifier(r"[A-Za-z.][A-Za-z0-9._]*")
        .operators("+-*/^<>=!&|~$@:")
        .keywords(&["if", "else", "repeat", "while", "function", "for", "in", "next", "break"])
        .atoms(&["TRUE", "FALSE", "NULL", "NA", "Inf", "NaN", "T", "F"])
}

pub fn ruby() -> StreamMode {
    StreamMode::new("ruby")
        .block_comment("=begin", "=end")
        .line_comment(&["#"])
        .strings(&["\"", "'", "`"])
        .identifier(r"[A-Za-z_][A-Za-z0-9_]*[?!]?")
        .keywords(&[
            "alias", "and", "begin", "break", "case", "class", "def", "defined", "do", "else",
            "elsif", "end", "ensure", "for", "if", "in", "module", "next", "not", "or", "redo",
            "rescue", "retry", "return", "self", "super", "then", "undef", "unless", "until",
            "when", "while", "yield",
        ])
        .atoms(&["true", "false", "nil"])
        .builtins(&["puts", "print", "require", "require_relative", "attr_accessor", "raise"])
}

pub fn scheme() -> StreamMode {
    StreamMode::new("scheme")
        .block_comment("#|", "|#")
        .line_comment(&[";"])
        .strings(&["\""])
        .identifier(LISP_IDENTIFIER)
        .operators("'`,@")
        .keywords(&[
            "define", "lambda", "let", "let*", "letrec", "if", "cond", "case", "and", "or",
            "when", "unless", "begin", "do", "delay", "quasiquote", "quote", "set!",
            "define-syntax", "syntax-rules", "else",
        ])
        .atoms(&["#t", "#f", "#true", "#false"])
}

pub fn shell() -> StreamMode {
    StreamMode::new("shell")
        .line_comment(&["#"])
        .strings(&["\"", "'", "`"])
        .identifier(r"[A-Za-z_][A-Za-z0-9_-]*")
        .keywords(&[
            "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "until", "do",
            "done", "in", "function", "select", "return", "exit", "break", "continue",
        ])
        .builtins(&[
            "echo", "cd", "export", "source", "alias", "unset", "read", "printf", "test",
            "local", "set", "eval", "exec", "shift", "trap",
        ])
}

const SQL_KEYWORDS: &[&str] = &[
    "select", "from", "where", "insert", "into", "values", "update", "set", "delete", "create",
    "table", "drop", "alter", "index", "view", "join", "inner", "left", "right", "outer",
    "full", "on", "as", "and", "or", "not", "is", "in", "between", "like", "order", "by",
    "group", "having", "limit", "offset", "union", "all", "distinct", "case", "when", "then",
    "else", "end", "primary", "key", "foreign", "references", "default", "unique", "check",
    "constraint", "exists", "with", "begin", "commit", "rollback",
];

fn sql_dialect(name: &str, line_comment: &[&str], extra_keywords: &[&str]) -> StreamMode {
    let mut keywords = SQL_KEYWORDS.to_vec();
    keywords.extend_from_slice(extra_keywords);

    StreamMode::new(name)
        .line_comment(line_comment)
        .block_comment("/*", "*/")
        .strings(&["'", "\"", "`"])
        .escape(None)
        .case_insensitive()
        .keywords(&keywords)
        .atoms(&["null", "true", "false"])
        .builtins(&[
            "int", "integer", "bigint", "smallint", "varchar", "char", "text", "blob", "date",
            "time", "timestamp", "boolean", "numeric", "decimal", "float", "real", "count",
            "sum", "avg", "min", "max", "coalesce",
        ])
}

pub fn standard_sql() -> StreamMode {
    sql_dialect("sql", &["--"], &[])
}

pub fn sqlite() -> StreamMode {
    sql_dialect(
        "sqlite",
        &["--"],
        &["pragma", "autoincrement", "without", "rowid", "vacuum", "attach", "detach", "glob"],
    )
}

pub fn mysql() -> StreamMode {
    sql_dialect(
        "mysql",
        &["--", "#"],
        &["auto_increment", "engine", "show", "describe", "use", "database", "replace", "ignore"],
    )
}

pub fn sparql() -> StreamMode {
    StreamMode::new("sparql")
        .line_comment(&["#"])
        .strings(&["\"", "'"])
        .case_insensitive()
        .identifier(r"[?$]?[A-Za-z_][A-Za-z0-9_]*")
        .operators("<>=!&|^*+-/:")
        .keywords(&[
            "select", "construct", "describe", "ask", "where", "from", "named", "prefix",
            "base", "optional", "filter", "union", "graph", "service", "bind", "values",
            "order", "by", "asc", "desc", "limit", "offset", "distinct", "reduced", "group",
            "having", "minus", "not", "exists", "as", "a",
        ])
        .atoms(&["true", "false"])
}

pub fn swift() -> StreamMode {
    clike("swift")
        .strings(&["\"\"\"", "\""])
        .keywords(&[
            "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func",
            "import", "init", "inout", "internal", "let", "open", "operator", "private",
            "protocol", "public", "static", "struct", "subscript", "typealias", "var",
            "break", "case", "continue", "default", "defer", "do", "else", "fallthrough",
            "for", "guard", "if", "in", "repeat", "return", "switch", "where", "while", "as",
            "catch", "is", "rethrows", "throw", "throws", "try", "super", "self", "Self",
            "async", "await",
        ])
        .atoms(&["true", "false", "nil"])
}

pub fn toml() -> StreamMode {
    StreamMode::new("toml")
        .line_comment(&["#"])
        .strings(&["\"\"\"", "\""])
        .raw_strings(&["'''", "'"])
        .operators("=.")
        .atoms(&["true", "false", "inf", "nan"])
}

pub fn turtle() -> StreamMode {
    StreamMode::new("turtle")
        .line_comment(&["#"])
        .strings(&["\"\"\"", "\"", "'"])
        .identifier(r"@?[A-Za-z_][A-Za-z0-9_-]*")
        .operators("<>^.;,:")
        .keywords(&["@prefix", "@base", "a", "PREFIX", "BASE"])
        .atoms(&["true", "false"])
}

pub fn vb() -> StreamMode {
    StreamMode::new("vb")
        .line_comment(&["'"])
        .strings(&["\""])
        .escape(None)
        .case_insensitive()
        .keywords(&[
            "addhandler", "addressof", "alias", "and", "andalso", "as", "byref", "byval",
            "call", "case", "catch", "class", "const", "declare", "dim", "do", "each", "else",
            "elseif", "end", "enum", "erase", "error", "event", "exit", "for", "friend",
            "function", "get", "handles", "if", "implements", "imports", "in", "inherits",
            "interface", "is", "let", "lib", "like", "loop", "me", "mod", "module",
            "mustinherit", "new", "next", "not", "of", "on", "option", "optional", "or",
            "orelse", "overloads", "overridable", "overrides", "private", "property",
            "protected", "public", "raiseevent", "readonly", "redim", "rem", "resume",
            "return", "select", "set", "shadows", "shared", "static", "step", "stop",
            "structure", "sub", "then", "throw", "to", "try", "typeof", "until", "while",
            "with", "withevents",
        ])
        .atoms(&["true", "false", "nothing"])
        .builtins(&[
            "boolean", "byte", "char", "date", "decimal", "double", "integer", "long",
            "object", "short", "single", "string",
        ])
}

pub fn yaml() -> StreamMode {
    StreamMode::new("yaml")
        .line_comment(&["#"])
        .strings(&["\"", "'"])
        .identifier(r"[A-Za-z_][A-Za-z0-9_.-]*")
        .operators(":-?|>&*!")
        .atoms(&["true", "false", "null", "yes", "no", "on", "off", "True", "False", "Null"])
}

/// Builtin stream engines keyed by catalog identifier.
/// Builtin stream mode keyed by catalog identifier
#[derive(Clone, Copy)]
pub struct BuiltinMode {
    pub identifier: &'static str,
    pub build: fn() -> StreamMode,
}

const fn mode(identifier: &'static str, build: fn() -> StreamMode) -> BuiltinMode {
    BuiltinMode { identifier, build }
}

pub const BUILTIN_MODES: &[BuiltinMode] = &[
    mode("apl", apl),
    mode("asn", asn1),
    mode("cmake", cmake),
    mode("c", c),
    mode("objective-c", objective_c),
    mode("kotlin", kotlin),
    mode("scala", scala),
    mode("c#", csharp),
    mode("cobol", cobol),
    mode("coffescript", coffeescript),
    mode("lisp", common_lisp),
    mode("dart", dart),
    mode("dockerfile", dockerfile),
    mode("erlang", erlang),
    mode("fortran", fortran),
    mode("go", go),
    mode("groovy", groovy),
    mode("haskell", haskell),
    mode("http", http),
    mode("typescript", typescript),
    mode("jinja", jinja2),
    mode("lua", lua),
    mode("ntriples", ntriples),
    mode("pascal", pascal),
    mode("perl", perl),
    mode("powershell", powershell),
    mode("properties", properties),
    mode("protobuf", protobuf),
    mode("r", r),
    mode("ruby", ruby),
    mode("scheme", scheme),
    mode("shell", shell),
    mode("sql", standard_sql),
    mode("sqlite", sqlite),
    mode("sparql", sparql),
    mode("mysql", mysql),
    mode("swift", swift),
    mode("toml", toml),
    mode("turtle", turtle),
    mode("vb", vb),
    mode("yaml", yaml),
];

/// Build every builtin stream mode, keyed by catalog identifier.
pub fn builtin_modes() -> impl Iterator<Item = (&'static str, StreamMode)> {
    BUILTIN_MODES
        .iter()
        .map(|entry| (entry.identifier, (entry.build)()))
}

/// Look up a builtin stream mode by catalog identifier.
pub fn builtin_mode(identifier: &str) -> Option<StreamMode> {
    BUILTIN_MODES
        .iter()
        .find(|entry| entry.identifier == identifier)
        .map(|entry| (entry.build)())
}
