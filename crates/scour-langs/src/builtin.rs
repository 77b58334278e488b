//! Preset definitions.
//!
//! Every preset is declared through `define_presets!`, which generates the
//! lazily-initialized constructor functions plus the `from_name` alias
//! table, `all()`, and `names()`.

use std::sync::{Arc, LazyLock};

use scour_core::{LineCommentRule, Profile, ProfileError, ProfileRules};

macro_rules! define_presets {
    (
        $(
            $fn_name:ident => {
                name: $name:literal,
                rules: $rules:expr,
                aliases: [$($alias:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            pub fn $fn_name() -> Arc<Profile> {
                static PRESET: LazyLock<Arc<Profile>> = LazyLock::new(|| {
                    Arc::new(
                        Profile::try_from($rules)
                            .unwrap_or_else(|e| panic!("builtin preset `{}`: {e}", $name)),
                    )
                });
                Arc::clone(&PRESET)
            }
        )*

        /// Look up a preset by canonical name or alias (case-insensitive).
        pub fn from_name(s: &str) -> Result<Arc<Profile>, ProfileError> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    $name $(| $alias)* => Ok($fn_name()),
                )*
                _ => Err(ProfileError::UnknownPreset(s.to_string())),
            }
        }

        /// All builtin presets, in declaration order.
        pub fn all() -> Vec<Arc<Profile>> {
            vec![$($fn_name(),)*]
        }

        /// Canonical preset names, in declaration order.
        pub fn names() -> &'static [&'static str] {
            &[$($name,)*]
        }
    };
}

define_presets! {
    plain => {
        name: "plain",
        rules: ProfileRules::named("plain"),
        aliases: ["text", "txt"],
    },
    c_family => {
        name: "c",
        rules: c_family_rules(),
        aliases: ["cpp", "c++", "java", "c-sharp", "cs", "go", "c-family"],
    },
    javascript => {
        name: "javascript",
        rules: javascript_rules(),
        aliases: ["js", "jsx", "typescript", "ts", "tsx"],
    },
    rust => {
        name: "rust",
        rules: rust_rules(),
        aliases: ["rs"],
    },
    python => {
        name: "python",
        rules: hash_comment_rules("python"),
        aliases: ["py"],
    },
    shell => {
        name: "shell",
        rules: shell_rules(),
        aliases: ["sh", "bash", "zsh"],
    },
    yaml => {
        name: "yaml",
        rules: hash_comment_rules("yaml"),
        aliases: ["yml"],
    },
    toml => {
        name: "toml",
        rules: hash_comment_rules("toml"),
        aliases: [],
    },
    markdown => {
        name: "markdown",
        rules: markdown_rules(),
        aliases: ["md"],
    },
    html => {
        name: "html",
        rules: html_rules(),
        aliases: ["xml", "svg", "vue", "svelte"],
    },
    css => {
        name: "css",
        rules: css_rules(),
        aliases: ["scss", "less"],
    },
    json => {
        name: "json",
        rules: json_rules(),
        aliases: [],
    },
    jsonc => {
        name: "jsonc",
        rules: jsonc_rules(),
        aliases: ["json5"],
    },
    sql => {
        name: "sql",
        rules: sql_rules(),
        aliases: ["mysql", "postgresql", "sqlite"],
    },
}

fn c_family_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"'],
        line_comment: Some(LineCommentRule::new("//")),
        block_comments: vec![("/*".into(), "*/".into())],
        ..ProfileRules::named("c")
    }
}

fn javascript_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"', '`'],
        line_comment: Some(LineCommentRule::new("//")),
        block_comments: vec![("/*".into(), "*/".into())],
        regex_literals: vec![("/".into(), "/".into())],
        ..ProfileRules::named("javascript")
    }
}

fn rust_rules() -> ProfileRules {
    // No `'` delimiter: lifetimes would open a string that never closes.
    ProfileRules {
        string_delimiters: vec!['"'],
        line_comment: Some(LineCommentRule::new("//")),
        block_comments: vec![("/*".into(), "*/".into())],
        ..ProfileRules::named("rust")
    }
}

fn hash_comment_rules(name: &str) -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"'],
        line_comment: Some(LineCommentRule::new("#")),
        ..ProfileRules::named(name)
    }
}

fn shell_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"', '`'],
        line_comment: Some(LineCommentRule::new("#")),
        ..ProfileRules::named("shell")
    }
}

fn markdown_rules() -> ProfileRules {
    ProfileRules {
        block_comments: vec![("<!--".into(), "-->".into())],
        ..ProfileRules::named("markdown")
    }
}

fn html_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"'],
        block_comments: vec![("<!--".into(), "-->".into())],
        ..ProfileRules::named("html")
    }
}

fn css_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"'],
        block_comments: vec![("/*".into(), "*/".into())],
        ..ProfileRules::named("css")
    }
}

fn json_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['"'],
        ..ProfileRules::named("json")
    }
}

fn jsonc_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['"'],
        line_comment: Some(LineCommentRule::new("//")),
        block_comments: vec![("/*".into(), "*/".into())],
        ..ProfileRules::named("jsonc")
    }
}

fn sql_rules() -> ProfileRules {
    ProfileRules {
        string_delimiters: vec!['\'', '"'],
        line_comment: Some(LineCommentRule::new("--")),
        block_comments: vec![("/*".into(), "*/".into())],
        ..ProfileRules::named("sql")
    }
}
