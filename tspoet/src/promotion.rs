//! Constructor-property promotion analysis.
//!
//! Decides which declared properties collapse into constructor-parameter
//! shorthand, and produces the constructor body with their
//! initialization statements removed.

use std::collections::HashSet;

use indexmap::IndexMap;
use regex::Regex;
use tspoet_codegen::CodeBlock;

use crate::function::FunctionSpec;
use crate::property::PropertySpec;

/// Result of promotion analysis for one class.
#[derive(Debug, Clone, Default)]
pub struct Promotion {
    properties: IndexMap<String, PropertySpec>,
    body: CodeBlock,
}

impl Promotion {
    /// Check whether the named property is promotable.
    pub fn is_promoted(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Look up a promotable property by name.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.get(name)
    }

    /// Promotable properties, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertySpec> {
        self.properties.values()
    }

    /// The constructor body with every promoted property's
    /// initialization statement removed.
    pub fn body(&self) -> &CodeBlock {
        &self.body
    }
}

/// Analyze a class's properties against its primary constructor.
///
/// A property is promotable only if all of the following hold:
///
/// - the constructor exists and has a body;
/// - a non-rest constructor parameter with the identical name exists;
/// - the parameter's type and optionality equal the property's;
/// - the property has no initializer of its own;
/// - the body contains `this.<name> = <name>` as a standalone statement
///   (statement boundaries: start of body, newline, or semicolon).
///
/// Anything short of that, including an assignment in an unrecognized
/// form, leaves the property to render as an ordinary field. Duplicate
/// property names resolve to the first declaration; later duplicates
/// are never promoted.
pub fn analyze(properties: &[PropertySpec], constructor: Option<&FunctionSpec>) -> Promotion {
    let Some(ctor) = constructor else {
        return Promotion::default();
    };
    let Some(body) = &ctor.body else {
        return Promotion::default();
    };

    let mut promoted = IndexMap::new();
    let mut seen = HashSet::new();
    let mut stripped = body.as_str().to_string();

    for property in properties {
        if !seen.insert(property.name.as_str()) {
            continue;
        }
        let Some(param) = ctor.parameter(&property.name) else {
            continue;
        };
        if param.ty != property.ty
            || param.optional != property.optional
            || property.initializer.is_some()
        {
            continue;
        }
        let pattern = init_statement_pattern(&property.name);
        if !pattern.is_match(&stripped) {
            continue;
        }
        // Keep the leading boundary so adjacent statements stay separated.
        stripped = pattern.replace(&stripped, "$1").into_owned();
        promoted.insert(property.name.clone(), property.clone());
    }

    Promotion {
        properties: promoted,
        body: CodeBlock::of(stripped),
    }
}

/// The canonical field-initialization statement: a statement boundary,
/// optional whitespace, `this.<name> = <name>`, optional whitespace,
/// a statement boundary.
fn init_statement_pattern(name: &str) -> Regex {
    let name = regex::escape(name);
    Regex::new(&format!(
        r"(\A|[\n;])\s*this\.{name}\s*=\s*{name}\s*([\n;]|\z)"
    ))
    .expect("valid promotion pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::ParameterSpec;
    use crate::types::TypeName;

    fn number_property(name: &str) -> PropertySpec {
        PropertySpec::new(name, TypeName::number())
    }

    fn number_param(name: &str) -> ParameterSpec {
        ParameterSpec::new(name, TypeName::number())
    }

    fn point_constructor() -> FunctionSpec {
        FunctionSpec::constructor()
            .param(number_param("x"))
            .param(number_param("y"))
            .body_line("this.x = x;")
            .body_line("this.y = y;")
    }

    #[test]
    fn test_both_coordinates_promote() {
        let properties = vec![number_property("x"), number_property("y")];
        let promotion = analyze(&properties, Some(&point_constructor()));
        assert!(promotion.is_promoted("x"));
        assert!(promotion.is_promoted("y"));
        assert_eq!(promotion.properties().count(), 2);
        assert!(promotion.body().as_str().trim().is_empty());
    }

    #[test]
    fn test_no_constructor_promotes_nothing() {
        let properties = vec![number_property("x")];
        let promotion = analyze(&properties, None);
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_bodiless_constructor_promotes_nothing() {
        let ctor = FunctionSpec::constructor().param(number_param("x"));
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_missing_parameter_excludes() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body_line("this.x = x;")
            .body_line("this.y = 0;");
        let promotion = analyze(&[number_property("x"), number_property("y")], Some(&ctor));
        assert!(promotion.is_promoted("x"));
        assert!(!promotion.is_promoted("y"));
    }

    #[test]
    fn test_type_mismatch_excludes() {
        let ctor = FunctionSpec::constructor()
            .param(ParameterSpec::new("x", TypeName::string()))
            .body_line("this.x = x;");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
        assert_eq!(promotion.body().as_str(), "this.x = x;\n");
    }

    #[test]
    fn test_optionality_mismatch_excludes() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x").optional())
            .body_line("this.x = x;");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_matching_optionality_promotes() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x").optional())
            .body_line("this.x = x;");
        let promotion = analyze(&[number_property("x").optional()], Some(&ctor));
        assert!(promotion.is_promoted("x"));
    }

    #[test]
    fn test_property_initializer_excludes() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body_line("this.x = x;");
        let promotion = analyze(&[number_property("x").initializer("0")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_missing_assignment_excludes() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body_line("console.log(x);");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_malformed_assignment_excludes() {
        for body in [
            "this.x = x + 1;",
            "this.x = y;",
            "this.x = x || 0;",
            "if (x) { this.x = x; }",
            "that.x = x;",
        ] {
            let ctor = FunctionSpec::constructor()
                .param(number_param("x"))
                .body(body);
            let promotion = analyze(&[number_property("x")], Some(&ctor));
            assert!(!promotion.is_promoted("x"), "should not promote for {body:?}");
        }
    }

    #[test]
    fn test_rest_parameter_never_eligible() {
        let ctor = FunctionSpec::constructor()
            .rest(ParameterSpec::new("x", TypeName::number()))
            .body_line("this.x = x;");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_statement_survives_between_removals() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .param(number_param("y"))
            .body_line("this.x = x;")
            .body_line("this.validate();")
            .body_line("this.y = y;");
        let properties = vec![number_property("x"), number_property("y")];
        let promotion = analyze(&properties, Some(&ctor));
        assert!(promotion.is_promoted("x"));
        assert!(promotion.is_promoted("y"));
        assert_eq!(promotion.body().as_str().trim(), "this.validate();");
    }

    #[test]
    fn test_semicolon_separated_statements_on_one_line() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body("setup(); this.x = x; teardown();");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(promotion.is_promoted("x"));
        assert_eq!(promotion.body().as_str(), "setup(); teardown();");
    }

    #[test]
    fn test_flexible_whitespace_around_assignment() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body("  this.x=x;");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(promotion.is_promoted("x"));
    }

    #[test]
    fn test_name_is_regex_escaped() {
        let ctor = FunctionSpec::constructor()
            .param(ParameterSpec::new("$el", TypeName::any()))
            .body_line("this.$el = $el;");
        let promotion = analyze(&[PropertySpec::new("$el", TypeName::any())], Some(&ctor));
        assert!(promotion.is_promoted("$el"));
    }

    #[test]
    fn test_similar_name_does_not_match() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body_line("this.xx = xx;");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(!promotion.is_promoted("x"));
    }

    #[test]
    fn test_duplicate_property_names_first_match_wins() {
        let ctor = FunctionSpec::constructor()
            .param(ParameterSpec::new("x", TypeName::string()))
            .body_line("this.x = x;");
        // First declaration has the wrong type; the string duplicate is
        // never considered.
        let properties = vec![number_property("x"), PropertySpec::new("x", TypeName::string())];
        let promotion = analyze(&properties, Some(&ctor));
        assert!(!promotion.is_promoted("x"));
        assert_eq!(promotion.body().as_str(), "this.x = x;\n");
    }

    #[test]
    fn test_only_first_occurrence_of_statement_removed() {
        let ctor = FunctionSpec::constructor()
            .param(number_param("x"))
            .body_line("this.x = x;")
            .body_line("this.x = x;");
        let promotion = analyze(&[number_property("x")], Some(&ctor));
        assert!(promotion.is_promoted("x"));
        assert_eq!(promotion.body().as_str().trim(), "this.x = x;");
    }
}
