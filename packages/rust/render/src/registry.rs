//! The renderer registry.
//!
//! A fixed mapping from entity-type name to its parser and template,
//! built once at first use and never mutated. The set is closed: adding a
//! new entity kind means adding a row here and rebuilding.

use std::collections::HashMap;
use std::sync::LazyLock;

use entitydoc_comments::FormatOptions;
use entitydoc_shared::{EntityRecord, EntitydocError, RenderableMapping, Result};

use crate::parsers::{parse_entity, parse_step, parse_task};
use crate::templates::{ENTITY_TEMPLATE, TASK_TEMPLATE};

type ParseFn = fn(&EntityRecord, &FormatOptions) -> Result<RenderableMapping>;

/// An entity type's renderer: its parse function and template name.
#[derive(Debug, Clone, Copy)]
pub struct RendererDescriptor {
    /// Template this entity kind renders with.
    pub template: &'static str,
    parser: ParseFn,
}

impl RendererDescriptor {
    /// Parse a record into the mapping the template expects.
    pub fn parse(&self, record: &EntityRecord, opts: &FormatOptions) -> Result<RenderableMapping> {
        (self.parser)(record, opts)
    }
}

static RENDERERS: LazyLock<HashMap<&'static str, RendererDescriptor>> = LazyLock::new(|| {
    HashMap::from([
        (
            "Entity",
            RendererDescriptor {
                template: ENTITY_TEMPLATE,
                parser: parse_entity,
            },
        ),
        (
            "Project",
            RendererDescriptor {
                template: ENTITY_TEMPLATE,
                parser: parse_entity,
            },
        ),
        (
            "Task",
            RendererDescriptor {
                template: TASK_TEMPLATE,
                parser: parse_task,
            },
        ),
        // Steps render with the task template; their parser blanks `process`
        // so the template's process section stays hidden.
        (
            "Step",
            RendererDescriptor {
                template: TASK_TEMPLATE,
                parser: parse_step,
            },
        ),
    ])
});

/// Look up the renderer for an entity-type name.
pub fn lookup(entity_type: &str) -> Result<&'static RendererDescriptor> {
    RENDERERS
        .get(entity_type)
        .ok_or_else(|| EntitydocError::unknown_entity_type(entity_type))
}

/// The registered entity-type names, sorted.
pub fn registered_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = RENDERERS.keys().copied().collect();
    types.sort_unstable();
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entity_kinds_registered() {
        assert_eq!(
            registered_types(),
            ["Entity", "Project", "Step", "Task"]
        );
    }

    #[test]
    fn unknown_type_fails_lookup() {
        let err = lookup("Widget").unwrap_err();
        match err {
            EntitydocError::UnknownEntityType { entity_type } => {
                assert_eq!(entity_type, "Widget");
            }
            other => panic!("expected UnknownEntityType, got {other}"),
        }
    }

    #[test]
    fn project_shares_the_entity_template() {
        assert_eq!(lookup("Project").unwrap().template, ENTITY_TEMPLATE);
        assert_eq!(lookup("Entity").unwrap().template, ENTITY_TEMPLATE);
    }

    #[test]
    fn step_shares_the_task_template() {
        assert_eq!(lookup("Step").unwrap().template, TASK_TEMPLATE);
        assert_eq!(lookup("Task").unwrap().template, TASK_TEMPLATE);
    }
}
