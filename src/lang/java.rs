use crate::error::{LiteralError, TestGenError};
use crate::models::{Literal, MethodSignature, ReturnKind, TestCase};

const FLOAT_TOLERANCE: &str = "1e-9";

// --- Literal rendering ---

/// Render a definition-file value as Java source.
///
/// Array element kind is taken from the first element only: strings give
/// `String[]`, integers `int[]`, nested sequences `int[][]`. An empty
/// sequence has no element to inspect and falls back to `new int[]{}`.
pub fn render_literal(value: &Literal) -> Result<String, LiteralError> {
    match value {
        Literal::Null => Ok("null".to_string()),
        Literal::Bool(b) => Ok(b.to_string()),
        Literal::Int(n) => Ok(n.to_string()),
        Literal::Float(f) => Ok(render_float(*f)),
        Literal::Str(s) => Ok(quote(s)),
        Literal::Array(items) => render_array(value, items),
        Literal::Unsupported { .. } => Err(unsupported(value)),
    }
}

/// Like [`render_literal`], but an empty sequence takes its element type
/// from an array-shaped declared type (`String[]` -> `new String[]{}`).
/// Modifiers such as `final` are not part of the type.
pub fn render_typed_literal(value: &Literal, declared: &str) -> Result<String, LiteralError> {
    if let Literal::Array(items) = value {
        if items.is_empty() {
            let ty = declared.split_whitespace().last().unwrap_or_default();
            if let Some(element) = ty.strip_suffix("[]") {
                return Ok(format!("new {}[]{{}}", element.trim_end()));
            }
        }
    }
    render_literal(value)
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "Double.NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        }
    } else {
        // Debug keeps a `.0` or exponent, so the literal stays a double.
        format!("{:?}", f)
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn render_array(value: &Literal, items: &[Literal]) -> Result<String, LiteralError> {
    let Some(first) = items.first() else {
        return Ok("new int[]{}".to_string());
    };

    match first {
        Literal::Str(_) => Ok(format!("new String[]{{{}}}", join_literals(items)?)),
        Literal::Int(_) => Ok(format!("new int[]{{{}}}", join_literals(items)?)),
        Literal::Array(_) => {
            let rows = items
                .iter()
                .map(render_int_row)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("new int[][]{{{}}}", rows.join(",")))
        }
        _ => Err(unsupported(value)),
    }
}

fn join_literals(items: &[Literal]) -> Result<String, LiteralError> {
    let rendered = items
        .iter()
        .map(render_literal)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(","))
}

fn render_int_row(row: &Literal) -> Result<String, LiteralError> {
    let Literal::Array(cells) = row else {
        return Err(LiteralError::NestedRow {
            value: row.to_string(),
            kind: row.kind_name(),
        });
    };
    let ints = cells
        .iter()
        .map(|cell| coerce_int(cell).map(|n| n.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("new int[]{{{}}}", ints.join(",")))
}

fn coerce_int(cell: &Literal) -> Result<i64, LiteralError> {
    let not_int = || LiteralError::NestedElement {
        value: cell.to_string(),
        kind: cell.kind_name(),
    };
    match cell {
        Literal::Int(n) => Ok(*n),
        Literal::Bool(b) => Ok(i64::from(*b)),
        Literal::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        Literal::Str(s) => s.trim().parse().map_err(|_| not_int()),
        _ => Err(not_int()),
    }
}

fn unsupported(value: &Literal) -> LiteralError {
    LiteralError::Unsupported {
        value: value.to_string(),
        kind: value.kind_name(),
    }
}

// --- Source files ---

/// `None` for void, otherwise the return statement that makes the stub compile.
pub fn default_return(kind: &ReturnKind) -> Option<String> {
    let stmt = match kind {
        ReturnKind::Void => return None,
        ReturnKind::Boolean => "return false;".to_string(),
        ReturnKind::Long => "return 0L;".to_string(),
        ReturnKind::Double => "return 0.0;".to_string(),
        ReturnKind::Float => "return 0.0f;".to_string(),
        ReturnKind::Str => "return \"\";".to_string(),
        ReturnKind::Array { element } => format!("return new {}[]{{}};", element),
        ReturnKind::Other => "return 0;".to_string(),
    };
    Some(stmt)
}

pub fn render_solution_class(package: &str, class_name: &str, sig: &MethodSignature) -> String {
    let return_line = default_return(&sig.return_kind())
        .map(|stmt| format!("        {}\n", stmt))
        .unwrap_or_default();

    format!(
        r#"package {package};

public class {class_name} {{
    public static {ret} {name}({params}) {{
        // TODO: implement solution
{return_line}    }}
}}
"#,
        ret = sig.return_type,
        name = sig.name,
        params = sig.params_text(),
    )
}

/// Render the JUnit 5 class for `cases`. Any case whose arity differs from
/// the signature, or any value without a literal form, fails the whole class.
pub fn render_test_class(
    package: &str,
    class_name: &str,
    sig: &MethodSignature,
    cases: &[TestCase],
) -> Result<String, TestGenError> {
    let kind = sig.return_kind();
    let mut body = String::new();

    for (i, case) in cases.iter().enumerate() {
        let case_num = i + 1;
        if case.args.len() != sig.params.len() {
            return Err(TestGenError::ArgCount {
                case: case_num,
                args: case.args.len(),
                params: sig.params.len(),
            });
        }
        let literal_err = |source| TestGenError::Literal {
            case: case_num,
            source,
        };

        let args = sig
            .params
            .iter()
            .zip(&case.args)
            .map(|(param, arg)| render_typed_literal(arg, &param.ty))
            .collect::<Result<Vec<_>, _>>()
            .map_err(literal_err)?;
        let call = format!("{}.{}({})", class_name, sig.name, args.join(", "));

        let assertion = match &kind {
            ReturnKind::Array { .. } => {
                let expected =
                    render_typed_literal(&case.expected, &sig.return_type).map_err(literal_err)?;
                format!("assertArrayEquals({}, {});", expected, call)
            }
            ReturnKind::Boolean if case.expected.is_truthy() => format!("assertTrue({});", call),
            ReturnKind::Boolean => format!("assertFalse({});", call),
            ReturnKind::Double | ReturnKind::Float => {
                let expected = render_literal(&case.expected).map_err(literal_err)?;
                format!("assertEquals({}, {}, {});", expected, call, FLOAT_TOLERANCE)
            }
            _ => {
                let expected = render_literal(&case.expected).map_err(literal_err)?;
                format!("assertEquals({}, {});", expected, call)
            }
        };
        body.push_str(&format!("        {}\n", assertion));
    }

    Ok(format!(
        r#"package {package};

import org.junit.jupiter.api.Test;
import static org.junit.jupiter.api.Assertions.*;

public class {class_name}Test {{
    @Test
    public void providedCases() {{
{body}    }}
}}
"#
    ))
}
