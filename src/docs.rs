//! Markdown documentation rendered from schemas

use crate::provider::Provider;
use crate::schema::{Attribute, Schema};
use std::fmt::Write;

/// Render provider and resource documentation as Markdown
pub fn render_markdown(provider: &Provider) -> String {
    let mut out = String::new();

    let schema = provider.schema();
    let _ = writeln!(out, "# Mailjet Provider\n");
    let _ = writeln!(out, "{}\n", schema.description);
    let _ = writeln!(out, "## Example Usage\n");
    let _ = writeln!(
        out,
        "```hcl\nprovider \"mailjet\" {{\n  public_key  = var.mailjet_public_key\n  private_key = var.mailjet_private_key\n}}\n```\n"
    );
    render_schema(&mut out, &schema);

    for (name, schema) in provider.resource_schemas() {
        let _ = writeln!(out, "\n# {name} (Resource)\n");
        let _ = writeln!(out, "{}\n", schema.description);
        render_schema(&mut out, &schema);
    }

    out
}

fn render_schema(out: &mut String, schema: &Schema) {
    let _ = writeln!(out, "## Schema");
    section(out, schema, "Required", |a| a.required);
    section(out, schema, "Optional", |a| a.optional);
    section(out, schema, "Read-Only", |a| a.computed && !a.is_configurable());
}

fn section(out: &mut String, schema: &Schema, title: &str, include: impl Fn(&Attribute) -> bool) {
    let mut attributes = schema
        .attributes
        .iter()
        .filter(|&(_, a)| include(a))
        .peekable();
    if attributes.peek().is_none() {
        return;
    }

    let _ = writeln!(out, "\n### {title}\n");
    for (name, attribute) in attributes {
        let mut notes = vec![attribute.attr_type.as_str().to_string()];
        if attribute.sensitive {
            notes.push("Sensitive".to_string());
        }
        let mut line = format!("- `{name}` ({}) {}", notes.join(", "), attribute.description);
        if let Some(ref default) = attribute.default {
            let _ = write!(line, " Defaults to `{default}`.");
        }
        if attribute.create_only {
            line.push_str(" Can only be set at creation.");
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}
