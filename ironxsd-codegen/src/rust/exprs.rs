//! Rendering of initializer expressions as Rust source.

use ironxsd_schema::Expr;
use proc_macro2::Literal;

/// Renders an expression as Rust source.
#[must_use]
pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Str(s) => Literal::string(s).to_string(),
        Expr::Bool(b) => b.to_string(),
        Expr::Int(v) => Literal::i32_unsuffixed(*v).to_string(),
        Expr::Long(v) => Literal::i64_unsuffixed(*v).to_string(),
        Expr::Float(v) => match special_float("f32", f64::from(*v)) {
            Some(constant) => constant,
            None if needs_exponent(f64::from(*v)) => format!("{v:e}"),
            None => Literal::f32_unsuffixed(*v).to_string(),
        },
        Expr::Double(v) => match special_float("f64", *v) {
            Some(constant) => constant,
            None if needs_exponent(*v) => format!("{v:e}"),
            None => Literal::f64_unsuffixed(*v).to_string(),
        },
        Expr::EnumConstant {
            enum_name,
            constant,
        } => format!("{enum_name}::{constant}"),
        Expr::Static(name) => name.clone(),
        Expr::Call { path, args } => format!("{path}({})", render_args(args)),
        Expr::Invoke {
            target,
            method,
            args,
        } => format!("{}.{method}({})", render_expr(target), render_args(args)),
    }
}

/// Non-finite values have no literal form.
fn special_float(ty: &str, v: f64) -> Option<String> {
    if v.is_nan() {
        Some(format!("{ty}::NAN"))
    } else if v == f64::INFINITY {
        Some(format!("{ty}::INFINITY"))
    } else if v == f64::NEG_INFINITY {
        Some(format!("{ty}::NEG_INFINITY"))
    } else {
        None
    }
}

/// Very large or very small magnitudes print positionally as long digit runs.
fn needs_exponent(v: f64) -> bool {
    let magnitude = v.abs();
    magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-5)
}

fn render_args(args: &[Expr]) -> String {
    args.iter().map(render_expr).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_string_escapes() {
        assert_eq!(render_expr(&Expr::str("abc")), "\"abc\"");
        assert_eq!(render_expr(&Expr::str("a\"b")), "\"a\\\"b\"");
    }

    #[test]
    fn test_render_numbers() {
        assert_eq!(render_expr(&Expr::Int(42)), "42");
        assert_eq!(render_expr(&Expr::Long(9_000_000_000)), "9000000000");
        assert_eq!(render_expr(&Expr::Double(2.0)), "2.0");
        assert_eq!(render_expr(&Expr::Float(0.5)), "0.5");
        assert_eq!(render_expr(&Expr::Float(f32::INFINITY)), "f32::INFINITY");
        assert_eq!(render_expr(&Expr::Double(f64::NEG_INFINITY)), "f64::NEG_INFINITY");
        assert_eq!(render_expr(&Expr::Double(f64::NAN)), "f64::NAN");
    }

    #[test]
    fn test_render_extreme_magnitudes() {
        assert_eq!(render_expr(&Expr::Double(1e300)), "1e300");
        assert_eq!(render_expr(&Expr::Double(-2.5e20)), "-2.5e20");
        assert_eq!(render_expr(&Expr::Double(1.5e-10)), "1.5e-10");
        assert_eq!(render_expr(&Expr::Float(1e30)), "1e30");
        assert_eq!(render_expr(&Expr::Double(0.0)), "0.0");
        assert_eq!(render_expr(&Expr::Double(123456.75)), "123456.75");

        let item = format!("const BIG: f64 = {};", render_expr(&Expr::Double(f64::MAX)));
        assert!(syn::parse_str::<syn::ItemConst>(&item).is_ok(), "{item}");
    }

    #[test]
    fn test_render_calls() {
        let call = Expr::call("DatatypeFactory::new_instance", Vec::new());
        assert_eq!(render_expr(&call), "DatatypeFactory::new_instance()");

        let invoke = Expr::Static("DATATYPE_FACTORY".into())
            .invoke("new_xml_gregorian_calendar", vec![Expr::str("2024-01-01")]);
        assert_eq!(
            render_expr(&invoke),
            "DATATYPE_FACTORY.new_xml_gregorian_calendar(\"2024-01-01\")"
        );
        assert_eq!(
            render_expr(&Expr::enum_constant("Color", "Green")),
            "Color::Green"
        );
    }
}
