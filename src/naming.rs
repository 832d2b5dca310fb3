/// Lower-case, drop punctuation, and turn whitespace/underscore runs into a
/// single hyphen. Hyphens already in the text are kept as-is.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for c in lowered.chars() {
        if c.is_whitespace() || c == '_' {
            in_gap = true;
            continue;
        }
        if !(c.is_alphanumeric() || c == '-') {
            continue;
        }
        if in_gap {
            slug.push('-');
            in_gap = false;
        }
        slug.push(c);
    }

    slug.trim_matches('-').to_string()
}

/// Build a Java class name from a free-text title: `"two sum"` -> `TwoSum`.
///
/// Non-alphanumerics split words; each word is title-cased (a letter is
/// upper-cased when it does not follow another letter). Names that would not
/// start with a letter get an `Exercise` prefix.
pub fn title_to_classname(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    let mut after_letter = false;

    for c in title.chars() {
        if c.is_alphabetic() {
            if after_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            if c.is_alphanumeric() {
                name.push(c);
            }
            after_letter = false;
        }
    }

    if !name.chars().next().is_some_and(char::is_alphabetic) {
        name.insert_str(0, "Exercise");
    }
    name
}
