use deunicode::deunicode_char;

/// Turns a display name into a CamelCase identifier made of `A-Za-z0-9`.
pub fn slugify_camel(str: &str) -> String {
    let mut slug = String::with_capacity(str.len());

    let mut is_start_of_word = false;
    let mut add_char = |c: char| {
        match c {
            '0'..='9' | 'A'..='Z' => slug.push(c),
            'a'..='z' if is_start_of_word => slug.push(c.to_ascii_uppercase()),
            'a'..='z' if !is_start_of_word => slug.push(c),

            _ => (),
        }

        is_start_of_word = !c.is_ascii_alphanumeric();
    };

    for char in str.chars() {
        if char.is_ascii() {
            add_char(char);
        } else if let Some(deunicoded) = deunicode_char(char) {
            deunicoded.chars().for_each(&mut add_char);
        }
    }

    slug.shrink_to_fit();
    slug
}

/// Slug of `name` that `is_taken` does not reject, adding `-2`, `-3`, ... as needed.
pub fn unique_slug(name: &str, fallback: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut base = slugify_camel(name);
    if base.is_empty() {
        base = fallback.to_owned();
    }

    if !is_taken(&base) {
        return base;
    }

    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::{slugify_camel, unique_slug};

    #[test]
    fn simple() {
        assert_eq!(slugify_camel("Torneo Tlaxcala 2025"), "TorneoTlaxcala2025");
    }

    #[test]
    fn simple_lower() {
        assert_eq!(slugify_camel("spring open 2025"), "springOpen2025");
    }

    #[test]
    fn puzzle_names() {
        assert_eq!(slugify_camel("3x3"), "3x3");
        assert_eq!(slugify_camel("3x3 one-handed"), "3x3OneHanded");
    }

    #[test]
    fn extra_non_ascii_translit() {
        assert_eq!(slugify_camel("Copa México"), "CopaMexico");
        assert_eq!(slugify_camel("_-_-_-Тест Open"), "TestOpen");
    }

    #[test]
    fn unique_suffixes() {
        let taken = ["SpringOpen", "SpringOpen-2"];
        assert_eq!(
            unique_slug("Spring Open", "Tournament", |s| taken.contains(&s)),
            "SpringOpen-3"
        );
        assert_eq!(
            unique_slug("Autumn", "Tournament", |s| taken.contains(&s)),
            "Autumn"
        );
    }

    #[test]
    fn fallback_for_empty_slug() {
        assert_eq!(unique_slug("!!!", "Tournament", |_| false), "Tournament");
    }
}
