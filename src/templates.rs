//! Template catalog
//!
//! Maps a [`ProjectSpec`] to the ordered list of files a new project gets.
//! Pure: no I/O, no clock, no randomness. The same spec always produces
//! byte-identical output.
//!
//! Templates are embedded at compile time. Placeholders use the
//! `{{.key}}` form and are filled in a single pass, so values are never
//! expanded twice.

use crate::project::{Platform, ProjectSpec};
use crate::provision::ENV_DIR;

/// Entry-point source file
pub const ENTRY_POINT: &str = "main.py";

/// Dependency manifest, one requirement per line
pub const MANIFEST: &str = "requirements.txt";

/// Ignore rules for version control
pub const IGNORE_FILE: &str = ".gitignore";

/// Project documentation
pub const README: &str = "README.md";

// =============================================================================
// Embedded Templates
// =============================================================================

mod python_templates {
    pub const MAIN_PY: &str = include_str!("../resources/templates/python/main.py");
    pub const REQUIREMENTS_TXT: &str =
        include_str!("../resources/templates/python/requirements.txt");
    pub const GITIGNORE: &str = include_str!("../resources/templates/python/gitignore.tmpl");
    pub const README_MD: &str = include_str!("../resources/templates/python/README.md.tmpl");

    pub const SETUP_SH: &str = include_str!("../resources/templates/python/setup.sh");
    pub const SETUP_BAT: &str = include_str!("../resources/templates/python/setup.bat");
}

/// One file to write, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub relative_path: String,
    pub content: String,
    pub executable: bool,
}

/// Files every project gets, in write order
const COMMON: &[(&str, &str)] = &[
    (ENTRY_POINT, python_templates::MAIN_PY),
    (MANIFEST, python_templates::REQUIREMENTS_TXT),
    (IGNORE_FILE, python_templates::GITIGNORE),
    (README, python_templates::README_MD),
];

/// Produce the catalog for a project.
///
/// Always the common files followed by exactly one setup script chosen by
/// the spec's platform.
pub fn produce(spec: &ProjectSpec) -> Vec<TemplateFile> {
    let vars = Vars::for_spec(spec);

    let mut files: Vec<TemplateFile> = COMMON
        .iter()
        .map(|(path, template)| TemplateFile {
            relative_path: (*path).to_string(),
            content: vars.render(template),
            executable: false,
        })
        .collect();

    files.push(setup_script(spec.platform(), &vars));
    files
}

fn setup_script(platform: Platform, vars: &Vars) -> TemplateFile {
    let content = match platform {
        Platform::Posix => vars.render(python_templates::SETUP_SH),
        // cmd.exe expects CRLF line endings
        Platform::Windows => vars
            .render(python_templates::SETUP_BAT)
            .replace('\n', "\r\n"),
    };

    TemplateFile {
        relative_path: platform.setup_script().to_string(),
        content,
        executable: platform.script_is_executable(),
    }
}

/// Placeholder values for one spec
struct Vars<'a> {
    pairs: [(&'static str, &'a str); 5],
}

impl<'a> Vars<'a> {
    fn for_spec(spec: &'a ProjectSpec) -> Self {
        let platform = spec.platform();
        Self {
            pairs: [
                ("name", spec.name().as_str()),
                ("setup_script", platform.setup_script()),
                ("setup_command", platform.setup_command()),
                ("activate", activate_command(platform)),
                ("env_dir", ENV_DIR),
            ],
        }
    }

    fn lookup(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    /// Single left-to-right pass. Substituted values are never rescanned,
    /// and unknown keys are copied through untouched.
    fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{.") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 3..];
            match after.find("}}") {
                Some(end) => match self.lookup(&after[..end]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 2..];
                    }
                    None => {
                        out.push_str("{{.");
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn activate_command(platform: Platform) -> &'static str {
    match platform {
        Platform::Posix => "source venv/bin/activate",
        Platform::Windows => "venv\\Scripts\\activate",
    }
}
