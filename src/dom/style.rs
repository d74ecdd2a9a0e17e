//! Document-level stylesheet
//!
//! Hiding works purely through CSS keyed on a body class, so toggling never
//! adds or removes annotation nodes.

use super::dom_err;
use crate::config::ClassNames;
use crate::tree::TreeError;
use web_sys::Document;

const STYLE_ELEMENT_ID: &str = "ck-translit-style";

pub fn stylesheet(classes: &ClassNames) -> String {
    [
        format!("body.{} .{} {{ display: none !important; }}", classes.hidden, classes.latin),
        format!(".{} .{} {{ font-size: 0.8em; opacity: 0.85; }}", classes.wrapper, classes.latin),
    ]
    .join("\n")
}

/// Add the stylesheet to `<head>` unless it is already there.
/// Returns whether anything was inserted.
pub fn install_stylesheet(document: &Document, classes: &ClassNames) -> Result<bool, TreeError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let style = document.create_element("style").map_err(dom_err)?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&stylesheet(classes)));

    match document.head() {
        Some(head) => head.append_child(&style).map_err(dom_err)?,
        None => {
            let root = document.document_element().ok_or(TreeError::Detached)?;
            root.append_child(&style).map_err(dom_err)?
        }
    };
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_rule_is_keyed_on_body_class() {
        let css = stylesheet(&ClassNames::default());
        assert!(css.contains("body.ck-hide-translit .ck-latin { display: none !important; }"));
    }

    #[test]
    fn test_custom_class_names() {
        let classes = ClassNames {
            latin: "roman".to_string(),
            ..ClassNames::default()
        };
        assert!(stylesheet(&classes).contains(".ck-annotated .roman"));
    }
}
