use crate::error::SignatureError;

/// How a declared return type shapes the generated stub and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnKind {
    Void,
    Boolean,
    Long,
    Double,
    Float,
    Str,
    Array { element: String },
    Other,
}

impl ReturnKind {
    pub fn classify(ty: &str) -> Self {
        if let Some(element) = ty.strip_suffix("[]") {
            return ReturnKind::Array {
                element: element.trim_end().to_string(),
            };
        }
        match ty {
            "void" => ReturnKind::Void,
            "boolean" => ReturnKind::Boolean,
            "long" => ReturnKind::Long,
            "double" => ReturnKind::Double,
            "float" => ReturnKind::Float,
            "String" => ReturnKind::Str,
            _ => ReturnKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
}

impl MethodSignature {
    pub const DEFAULT_TEXT: &'static str = "void run()";

    /// `void run()`, used when a signature is missing or unparsable.
    pub fn fallback() -> Self {
        Self {
            return_type: "void".to_string(),
            name: "run".to_string(),
            params: Vec::new(),
        }
    }

    pub fn return_kind(&self) -> ReturnKind {
        ReturnKind::classify(&self.return_type)
    }

    pub fn params_text(&self) -> String {
        self.params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn declaration(&self) -> String {
        format!("{} {}({})", self.return_type, self.name, self.params_text())
    }
}

/// Parse a single-line Java-style signature such as `int foo(int a, String s)`.
///
/// The return type is the first whitespace-delimited token, the method name
/// must be identifier-shaped, and everything between the opening parenthesis
/// and the final closing one is the parameter list.
pub fn parse_signature(sig: &str) -> Result<MethodSignature, SignatureError> {
    let malformed = || SignatureError::Malformed {
        signature: sig.to_string(),
    };

    let trimmed = sig.trim();
    if trimmed.contains(['\n', '\r']) {
        return Err(malformed());
    }

    let body = trimmed.strip_suffix(')').ok_or_else(malformed)?;

    let type_end = body.find(char::is_whitespace).ok_or_else(malformed)?;
    let (return_type, rest) = body.split_at(type_end);
    let rest = rest.trim_start();

    let name_len = identifier_len(rest);
    if name_len == 0 {
        return Err(malformed());
    }
    let (name, rest) = rest.split_at(name_len);

    let params_str = rest.trim_start().strip_prefix('(').ok_or_else(malformed)?;
    let params = parse_params(params_str, sig)?;

    Ok(MethodSignature {
        return_type: return_type.to_string(),
        name: name.to_string(),
        params,
    })
}

/// Byte length of the leading identifier, or 0. The first character is an
/// ASCII letter or underscore; later ones may be any word character.
fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return 0,
    }
    chars
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn parse_params(params_str: &str, sig: &str) -> Result<Vec<Param>, SignatureError> {
    let trimmed = params_str.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        let tokens: Vec<&str> = part.split_whitespace().collect();
        let Some((name, ty)) = tokens.split_last().filter(|(_, ty)| !ty.is_empty()) else {
            return Err(SignatureError::Parameter {
                segment: part.to_string(),
                signature: sig.to_string(),
            });
        };

        params.push(Param {
            ty: ty.join(" "),
            name: name.to_string(),
        });
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_array() {
        let sig = parse_signature("int sumArray(int[] arr)").unwrap();
        assert_eq!(sig.return_type, "int");
        assert_eq!(sig.name, "sumArray");
        assert_eq!(sig.params.len(), 1);
        assert_eq!(sig.params[0].ty, "int[]");
        assert_eq!(sig.params[0].name, "arr");
    }

    #[test]
    fn test_params_keep_declaration_order() {
        let sig = parse_signature("String join(String[] parts, String sep, int limit)").unwrap();
        let names: Vec<&str> = sig.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["parts", "sep", "limit"]);
        assert_eq!(sig.return_kind(), ReturnKind::Str);
    }

    #[test]
    fn test_multi_token_type() {
        let sig = parse_signature("  void  touch ( final int[] cells , long   n )  ").unwrap();
        assert_eq!(sig.name, "touch");
        assert_eq!(sig.params[0].ty, "final int[]");
        assert_eq!(sig.params[1].ty, "long");
        assert_eq!(sig.params[1].name, "n");
    }

    #[test]
    fn test_unicode_name_continuation() {
        let sig = parse_signature("int größe(int a)").unwrap();
        assert_eq!(sig.name, "größe");
        assert_eq!(sig.params[0].name, "a");

        assert!(parse_signature("int ßize(int a)").is_err());
    }

    #[test]
    fn test_no_params() {
        let sig = parse_signature("void run()").unwrap();
        assert!(sig.params.is_empty());
        assert_eq!(sig, MethodSignature::fallback());
        assert_eq!(sig.declaration(), MethodSignature::DEFAULT_TEXT);
    }

    #[test]
    fn test_malformed_shapes() {
        for bad in [
            "",
            "run()",
            "int sum(int a",
            "int sum int a)",
            "int 2sum(int a)",
            "int sum(int a) extra",
            "int\nsum(int a)",
        ] {
            assert!(
                matches!(parse_signature(bad), Err(SignatureError::Malformed { .. })),
                "expected failure for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parameter_without_name() {
        let err = parse_signature("int sum(int a, int)").unwrap_err();
        assert_eq!(
            err,
            SignatureError::Parameter {
                segment: "int".to_string(),
                signature: "int sum(int a, int)".to_string(),
            }
        );
    }

    #[test]
    fn test_trailing_comma_is_an_empty_parameter() {
        let err = parse_signature("int sum(int a,)").unwrap_err();
        assert!(err.to_string().contains("\"\""));
    }

    #[test]
    fn test_return_kinds() {
        assert_eq!(ReturnKind::classify("void"), ReturnKind::Void);
        assert_eq!(ReturnKind::classify("boolean"), ReturnKind::Boolean);
        assert_eq!(ReturnKind::classify("long"), ReturnKind::Long);
        assert_eq!(ReturnKind::classify("float"), ReturnKind::Float);
        assert_eq!(
            ReturnKind::classify("int[][]"),
            ReturnKind::Array {
                element: "int[]".to_string()
            }
        );
        assert_eq!(ReturnKind::classify("List<Integer>"), ReturnKind::Other);
    }
}
