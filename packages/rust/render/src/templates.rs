//! Template environment setup and rendering.
//!
//! The two built-in templates are compiled into the binary; a configured
//! templates directory overrides them per file name, falling back to the
//! built-in source for any file not present there.

use std::fs;
use std::path::Path;

use minijinja::Environment;
use tracing::debug;

use entitydoc_shared::{EntitydocError, RenderableMapping, Result};

/// Template for generic entities and projects.
pub const ENTITY_TEMPLATE: &str = "md_entity.jinja";

/// Template for tasks and steps.
pub const TASK_TEMPLATE: &str = "md_task.jinja";

const BUILTIN_TEMPLATES: [(&str, &str); 2] = [
    (ENTITY_TEMPLATE, include_str!("../templates/md_entity.jinja")),
    (TASK_TEMPLATE, include_str!("../templates/md_task.jinja")),
];

/// A loaded template environment, immutable after construction.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Build the environment, loading overrides from `templates_dir` when
    /// the correspondingly named file exists there.
    pub fn new(templates_dir: Option<&Path>) -> Result<Self> {
        let mut env = Environment::new();

        for (name, builtin) in BUILTIN_TEMPLATES {
            let source = match templates_dir.map(|dir| dir.join(name)) {
                Some(path) if path.is_file() => {
                    debug!(template = name, path = %path.display(), "using template override");
                    fs::read_to_string(&path).map_err(|e| EntitydocError::io(&path, e))?
                }
                _ => builtin.to_string(),
            };

            env.add_template_owned(name.to_string(), source)
                .map_err(|e| EntitydocError::Template(format!("{name}: {e}")))?;
        }

        Ok(Self { env })
    }

    /// Render a mapping through the named template.
    pub fn render(&self, template: &str, mapping: &RenderableMapping) -> Result<String> {
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|e| EntitydocError::Template(e.to_string()))?;

        tmpl.render(mapping)
            .map_err(|e| EntitydocError::Template(format!("{template}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn entity_mapping() -> RenderableMapping {
        let mut comments = IndexMap::new();
        comments.insert("notes".to_string(), "T1 improved after the bake.".to_string());

        RenderableMapping {
            name: "Qubit calibration".into(),
            entity_type: "Project".into(),
            id: "PRJ-001".into(),
            user: "mara".into(),
            description: "Calibrate the 5-qubit chip.".into(),
            parent: None,
            comments,
            children: vec!["tasks/resonator_sweep.toml".into()],
            objective: None,
            process: None,
            start_time: None,
            end_time: None,
        }
    }

    fn task_mapping() -> RenderableMapping {
        let mut mapping = entity_mapping();
        mapping.entity_type = "Task".into();
        mapping.objective = Some("Find the resonance dip".into());
        mapping.process = Some("Sweep 6.9-7.1 GHz".into());
        mapping.start_time = Some("2024-03-01 09:30".into());
        mapping.end_time = Some("2024-03-01 11:00".into());
        mapping
    }

    #[test]
    fn entity_template_renders_fields_and_comments() {
        let engine = TemplateEngine::new(None).expect("engine");
        let output = engine.render(ENTITY_TEMPLATE, &entity_mapping()).expect("render");

        assert!(output.starts_with("# Qubit calibration"));
        assert!(output.contains("**ID:** PRJ-001"));
        assert!(output.contains("## notes"));
        assert!(output.contains("T1 improved after the bake."));
        assert!(output.contains("- tasks/resonator_sweep.toml"));
        // No parent line when parent is null.
        assert!(!output.contains("**Parent:**"));
    }

    #[test]
    fn entity_template_shows_parent_when_set() {
        let mut mapping = entity_mapping();
        mapping.parent = Some("projects/fridge.toml".into());

        let engine = TemplateEngine::new(None).expect("engine");
        let output = engine.render(ENTITY_TEMPLATE, &mapping).expect("render");
        assert!(output.contains("**Parent:** projects/fridge.toml"));
    }

    #[test]
    fn task_template_renders_objective_and_process() {
        let engine = TemplateEngine::new(None).expect("engine");
        let output = engine.render(TASK_TEMPLATE, &task_mapping()).expect("render");

        assert!(output.contains("## Objective"));
        assert!(output.contains("Find the resonance dip"));
        assert!(output.contains("## Process"));
        assert!(output.contains("Sweep 6.9-7.1 GHz"));
        assert!(output.contains("**Started:** 2024-03-01 09:30"));
    }

    #[test]
    fn task_template_hides_empty_process_section() {
        let mut mapping = task_mapping();
        mapping.process = Some(String::new());

        let engine = TemplateEngine::new(None).expect("engine");
        let output = engine.render(TASK_TEMPLATE, &mapping).expect("render");

        assert!(output.contains("## Objective"));
        assert!(!output.contains("## Process"));
    }

    #[test]
    fn templates_dir_overrides_builtin() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(ENTITY_TEMPLATE),
            "CUSTOM ENTITY {{ name }}\n",
        )
        .expect("write override");

        let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
        let output = engine.render(ENTITY_TEMPLATE, &entity_mapping()).expect("render");
        assert_eq!(output, "CUSTOM ENTITY Qubit calibration");

        // The task template falls back to the built-in source.
        let output = engine.render(TASK_TEMPLATE, &task_mapping()).expect("render");
        assert!(output.contains("## Objective"));
    }

    #[test]
    fn unknown_template_name_errors() {
        let engine = TemplateEngine::new(None).expect("engine");
        let err = engine.render("md_missing.jinja", &entity_mapping()).unwrap_err();
        assert!(matches!(err, EntitydocError::Template(_)));
    }
}
