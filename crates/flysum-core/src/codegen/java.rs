//! Java renderer

use std::path::PathBuf;

use super::{EnumModel, RenderedArtifact};

const INDENT: &str = "    ";

/// Render the model as a Java enum placed under its package directories
pub(super) fn render(model: &EnumModel) -> RenderedArtifact {
    let mut relative_path: PathBuf = model.package.iter().collect();
    relative_path.push(format!("{}.java", model.name));

    RenderedArtifact {
        relative_path,
        source: render_source(model),
    }
}

fn render_source(model: &EnumModel) -> String {
    let mut lines = vec!["// Generated by flysum. Do not edit.".to_string(), String::new()];

    if !model.package.is_empty() {
        lines.push(format!("package {};", model.package.join(".")));
        lines.push(String::new());
    }

    lines.push(format!("public enum {} {{", model.name));
    lines.push(String::new());

    if model.constants.is_empty() {
        lines.push(format!("{INDENT};"));
    }
    let last = model.constants.len().saturating_sub(1);
    for (i, constant) in model.constants.iter().enumerate() {
        let terminator = if i == last { ';' } else { ',' };
        lines.push(format!(
            "{INDENT}{}({}){terminator}",
            constant.name, constant.value
        ));
    }
    lines.push(String::new());

    let field = &model.field;
    lines.push(format!("{INDENT}private final int {field};"));
    lines.push(String::new());
    lines.push(format!("{INDENT}private {}(int {field}) {{", model.name));
    lines.push(format!("{INDENT}{INDENT}this.{field} = {field};"));
    lines.push(format!("{INDENT}}}"));
    lines.push(String::new());
    lines.push(format!("{INDENT}public int {}() {{", model.accessor));
    lines.push(format!("{INDENT}{INDENT}return {field};"));
    lines.push(format!("{INDENT}}}"));
    lines.push("}".to_string());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}
