//! Naming utilities shared by the generators.

/// Convert a raw table or column name to an exported PascalCase identifier.
///
/// Letters are kept and upper-cased when they start a word. A digit is kept
/// and starts a new word. `_`, space, `-` and `.` separate words and are
/// dropped. Any other byte is dropped without affecting word boundaries.
///
/// ```
/// use rowsmith_core::convert_name;
///
/// assert_eq!(convert_name("user_name"), "UserName");
/// assert_eq!(convert_name("a2b"), "A2B");
/// ```
pub fn convert_name(raw: &str) -> String {
    let name = raw.trim();
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for b in name.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' => {
                let c = if capitalize_next {
                    b.to_ascii_uppercase()
                } else {
                    b
                };
                out.push(c as char);
                capitalize_next = false;
            }
            b'0'..=b'9' => {
                out.push(b as char);
                capitalize_next = true;
            }
            b'_' | b' ' | b'-' | b'.' => capitalize_next = true,
            _ => {}
        }
    }
    out
}

/// Convert a string to snake_case (e.g., "UserID" -> "user_id")
///
/// Runs of capitals are treated as a single word, so acronyms stay together.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    result.push('_');
                }
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "UserRole" -> "USER_ROLE")
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("aliases", "alias"),
    ("analyses", "analysis"),
    ("bonuses", "bonus"),
    ("buses", "bus"),
    ("caches", "cache"),
    ("calves", "calf"),
    ("campuses", "campus"),
    ("children", "child"),
    ("cookies", "cookie"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("niches", "niche"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("quizzes", "quiz"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("shoes", "shoe"),
    ("statuses", "status"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("toes", "toe"),
    ("vertices", "vertex"),
    ("viruses", "virus"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Reduce a plural English word to its singular form.
///
/// Only the last word of a compound name is changed, so `user_roles`
/// becomes `user_role`. The casing of the input is kept.
///
/// ```
/// use rowsmith_core::singularize;
///
/// assert_eq!(singularize("users"), "user");
/// assert_eq!(singularize("order_categories"), "order_category");
/// ```
pub fn singularize(word: &str) -> String {
    let split = word
        .rfind(['_', '-', ' '])
        .map(|i| i + 1)
        .unwrap_or(0);
    let (head, tail) = word.split_at(split);
    if tail.is_empty() {
        return word.to_string();
    }

    let lower = tail.to_ascii_lowercase();
    let singular = singularize_lower(&lower);
    format!("{}{}", head, restore_case(tail, &lower, &singular))
}

fn singularize_lower(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return singular.to_string();
    }

    if word.len() > 4
        && let Some(stem) = word.strip_suffix("ies")
    {
        return format!("{}y", stem);
    }
    for suffix in ["sses", "xes", "ches", "shes", "zzes", "oes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Re-apply the casing of `original` to its singular form.
fn restore_case(original: &str, lower: &str, singular: &str) -> String {
    let mut common = lower
        .bytes()
        .zip(singular.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    while !original.is_char_boundary(common) {
        common -= 1;
    }

    let all_upper = original.chars().any(|c| c.is_ascii_alphabetic())
        && !original.chars().any(|c| c.is_ascii_lowercase());
    let rest = &singular[common..];

    let mut out = original[..common].to_string();
    if all_upper {
        out.push_str(&rest.to_ascii_uppercase());
    } else {
        out.push_str(rest);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_name() {
        assert_eq!(convert_name("user_name"), "UserName");
        assert_eq!(convert_name("id"), "Id");
        assert_eq!(convert_name("ID"), "ID");
        assert_eq!(convert_name("created-at"), "CreatedAt");
        assert_eq!(convert_name("first name"), "FirstName");
        assert_eq!(convert_name("schema.table"), "SchemaTable");
        assert_eq!(convert_name("  padded_name  "), "PaddedName");
    }

    #[test]
    fn test_convert_name_digits_start_words() {
        assert_eq!(convert_name("a2b"), "A2B");
        assert_eq!(convert_name("address2line"), "Address2Line");
        assert_eq!(convert_name("2fa_code"), "2FaCode");
    }

    #[test]
    fn test_convert_name_skips_other_bytes_without_breaking_words() {
        assert_eq!(convert_name("price$usd"), "Priceusd");
        assert_eq!(convert_name("user__name"), "UserName");
        assert_eq!(convert_name("_$tag"), "Tag");
        assert_eq!(convert_name("caf\u{e9}_au_lait"), "CafAuLait");
    }

    #[test]
    fn test_convert_name_blank() {
        assert_eq!(convert_name(""), "");
        assert_eq!(convert_name("  "), "");
        assert_eq!(convert_name("\t\n"), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms_and_digits() {
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("UserID"), "user_id");
        assert_eq!(to_snake_case("URLPath"), "url_path");
        assert_eq!(to_snake_case("A2B"), "a2_b");
        assert_eq!(to_snake_case("Address2Line"), "address2_line");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("User"), "USER");
        assert_eq!(to_screaming_snake_case("UserRole"), "USER_ROLE");
    }

    #[test]
    fn test_singularize_regular() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("archives"), "archive");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("ties"), "tie");
    }

    #[test]
    fn test_singularize_irregular_and_uncountable() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("news"), "news");
        assert_eq!(singularize("metadata"), "metadata");
    }

    #[test]
    fn test_singularize_uses_words() {
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("bonuses"), "bonus");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("causes"), "cause");
    }

    #[test]
    fn test_singularize_already_singular() {
        assert_eq!(singularize("user"), "user");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("analysis"), "analysis");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn test_singularize_compound_names() {
        assert_eq!(singularize("user_roles"), "user_role");
        assert_eq!(singularize("order_categories"), "order_category");
        assert_eq!(singularize("team-people"), "team-person");
        assert_eq!(singularize("users_"), "users_");
    }

    #[test]
    fn test_singularize_keeps_case() {
        assert_eq!(singularize("Users"), "User");
        assert_eq!(singularize("USERS"), "USER");
        assert_eq!(singularize("UserRoles"), "UserRole");
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("CATEGORIES"), "CATEGORY");
    }
}
