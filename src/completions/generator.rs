use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::{generate, shells};
use std::io::{self, Write};
use std::str::FromStr;

/// Shells a completion script can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Fish,
    Zsh,
}

impl Shell {
    /// Every supported shell, in name order
    pub const ALL: [Shell; 3] = [Shell::Bash, Shell::Fish, Shell::Zsh];

    pub fn name(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Fish => "fish",
            Shell::Zsh => "zsh",
        }
    }

    /// Script appended after the clap-generated one.
    ///
    /// It asks `<bin> complete` for candidates first and falls back to the
    /// static completion when that prints nothing.
    fn dynamic_hook(self, bin: &str) -> String {
        let template = match self {
            Shell::Bash => BASH_HOOK,
            Shell::Fish => FISH_HOOK,
            Shell::Zsh => ZSH_HOOK,
        };
        template.replace("@BIN@", bin)
    }
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Shell::ALL
            .into_iter()
            .find(|shell| shell.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Shell::ALL.iter().map(|shell| shell.name()).collect();
                anyhow!("Unsupported shell '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

const BASH_HOOK: &str = r#"
_@BIN@_dynamic() {
    local cur prev
    cur="${COMP_WORDS[COMP_CWORD]}"
    prev="${COMP_WORDS[COMP_CWORD-1]}"
    local candidates
    candidates="$(@BIN@ complete bash "${COMP_LINE:0:COMP_POINT}" "$cur" "$prev" 2>/dev/null)"
    if [[ -n "$candidates" ]]; then
        COMPREPLY=( $(compgen -W "$candidates" -- "$cur") )
        return 0
    fi
    _@BIN@ "$@"
}
complete -F _@BIN@_dynamic -o bashdefault -o default @BIN@
"#;

const ZSH_HOOK: &str = r#"
_@BIN@_dynamic() {
    local -a candidates
    candidates=(${(f)"$(@BIN@ complete zsh "$LBUFFER" "${words[CURRENT]}" "${words[CURRENT-1]}" 2>/dev/null)"})
    if (( ${#candidates} )); then
        compadd -a candidates
        return
    fi
    _@BIN@ "$@"
}
compdef _@BIN@_dynamic @BIN@
"#;

const FISH_HOOK: &str = r#"
complete -c @BIN@ -n "__fish_seen_subcommand_from show completions" -f -a "(@BIN@ complete fish (commandline -cp) (commandline -ct) 2>/dev/null)"
"#;

/// Write a completion script for `cmd` to `out`
///
/// The clap-generated script covers subcommands and flags; the appended hook
/// routes topic and shell-name arguments through `<bin> complete`.
pub fn generate_completions(
    cmd: &mut Command,
    shell: Shell,
    out: &mut dyn Write,
) -> io::Result<()> {
    let bin_name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name.as_str(), out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name.as_str(), out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name.as_str(), out),
    }

    out.write_all(shell.dynamic_hook(&bin_name).as_bytes())
}
