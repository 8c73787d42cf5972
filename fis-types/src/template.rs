//! Template variable scanning for user-authored prompt/schema templates.
//!
//! Templates parametrize instructions with `${name:type}` placeholders that
//! are resolved from earlier query results. The scanner gates whether a
//! template is well-formed before it is persisted on-chain; the type tag is
//! structural only and never interpreted here.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FisError;

static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").expect("variable pattern is a valid regex"));

/// One `${name:type}` placeholder extracted from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub name: String,
    /// Free-form type tag. Consumers interpret it permissively.
    pub ty: String,
}

/// Extract and validate every `${...}` placeholder in `template`, in order
/// of appearance. Text outside placeholders is ignored; an unterminated
/// `${` never matches and is left to the consumer.
pub fn scan_variables(template: &str) -> Result<Vec<TemplateVariable>, FisError> {
    let mut variables = Vec::new();
    for m in VARIABLE_RE.find_iter(template) {
        // Strip the "${" prefix and "}" suffix to get the inner definition.
        let fragment = &template[m.start() + 2..m.end() - 1];
        variables.push(parse_variable(fragment)?);
    }
    Ok(variables)
}

/// Scan and discard: succeeds iff every placeholder is well-formed.
pub fn validate_template(template: &str) -> Result<(), FisError> {
    scan_variables(template).map(|_| ())
}

/// Substitute every placeholder with its bound value. The caller performs
/// this before submission; the envelope itself is substitution-agnostic.
///
/// Fails on a malformed placeholder or a name with no binding.
pub fn render(
    template: &str,
    bindings: &BTreeMap<String, String>,
) -> Result<String, FisError> {
    let mut rendered = String::with_capacity(template.len());
    let mut tail = 0;
    for m in VARIABLE_RE.find_iter(template) {
        let fragment = &template[m.start() + 2..m.end() - 1];
        let variable = parse_variable(fragment)?;
        let value = bindings
            .get(&variable.name)
            .ok_or(FisError::UnboundTemplateVariable {
                name: variable.name,
            })?;
        rendered.push_str(&template[tail..m.start()]);
        rendered.push_str(value);
        tail = m.end();
    }
    rendered.push_str(&template[tail..]);
    Ok(rendered)
}

fn parse_variable(fragment: &str) -> Result<TemplateVariable, FisError> {
    let invalid = |reason: &str| FisError::InvalidTemplateVariable {
        fragment: fragment.to_string(),
        reason: reason.to_string(),
    };
    if fragment.chars().any(char::is_whitespace) {
        return Err(invalid("definition must not contain whitespace"));
    }
    let Some((name, ty)) = fragment.split_once(':') else {
        return Err(invalid("expected name:type"));
    };
    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    if ty.is_empty() {
        return Err(invalid("empty type"));
    }
    Ok(TemplateVariable {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_well_formed_template() {
        let variables =
            scan_variables("swap ${amount:u128} of ${denom:string} via ${pool:address}").unwrap();
        assert_eq!(variables.len(), 3);
        assert_eq!(variables[0].name, "amount");
        assert_eq!(variables[0].ty, "u128");
        assert_eq!(variables[2].name, "pool");
        assert_eq!(variables[2].ty, "address");
    }

    #[test]
    fn test_scan_no_placeholders() {
        assert_eq!(scan_variables("plain text, no variables").unwrap(), vec![]);
    }

    #[test]
    fn test_scan_rejects_missing_colon() {
        let err = scan_variables("x ${name} y").unwrap_err();
        assert_eq!(
            err,
            FisError::InvalidTemplateVariable {
                fragment: "name".to_string(),
                reason: "expected name:type".to_string()
            }
        );
    }

    #[test]
    fn test_scan_rejects_empty_name() {
        let err = scan_variables("${:type}").unwrap_err();
        assert!(matches!(
            err,
            FisError::InvalidTemplateVariable { ref fragment, .. } if fragment == ":type"
        ));
    }

    #[test]
    fn test_scan_rejects_empty_type() {
        let err = scan_variables("${name:}").unwrap_err();
        assert!(matches!(
            err,
            FisError::InvalidTemplateVariable { ref fragment, .. } if fragment == "name:"
        ));
    }

    #[test]
    fn test_scan_rejects_embedded_whitespace() {
        let err = scan_variables("${na me:type}").unwrap_err();
        assert_eq!(
            err,
            FisError::InvalidTemplateVariable {
                fragment: "na me".to_string(),
                reason: "definition must not contain whitespace".to_string()
            }
        );
    }

    #[test]
    fn test_scan_reports_first_offending_placeholder() {
        // First placeholder is fine, second is malformed.
        let err = scan_variables("${a:u8} ${broken}").unwrap_err();
        assert!(matches!(
            err,
            FisError::InvalidTemplateVariable { ref fragment, .. } if fragment == "broken"
        ));
    }

    #[test]
    fn test_type_tag_not_semantically_checked() {
        // Unknown type tags pass: consumers interpret permissively.
        let variables = scan_variables("${x:definitely-not-a-type!}").unwrap();
        assert_eq!(variables[0].ty, "definitely-not-a-type!");
    }

    #[test]
    fn test_render_substitutes_bound_variables() {
        let mut bindings = BTreeMap::new();
        bindings.insert("amount".to_string(), "1000".to_string());
        bindings.insert("denom".to_string(), "ulux".to_string());
        let rendered = render("send ${amount:u128}${denom:string} now", &bindings).unwrap();
        assert_eq!(rendered, "send 1000ulux now");
    }

    #[test]
    fn test_render_rejects_unbound_variable() {
        let err = render("${missing:u64}", &BTreeMap::new()).unwrap_err();
        assert_eq!(
            err,
            FisError::UnboundTemplateVariable {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_render_rejects_malformed_placeholder() {
        let mut bindings = BTreeMap::new();
        bindings.insert("a".to_string(), "1".to_string());
        assert!(render("${a:u8} ${a}", &bindings).is_err());
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let rendered = render("nothing to do", &BTreeMap::new()).unwrap();
        assert_eq!(rendered, "nothing to do");
    }
}
