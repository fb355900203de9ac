//! Turns theme names into registry ids.
//!
//! Ids are lowercase ASCII with dashes, so "Agency Noir Édition" becomes
//! `agency-noir-edition`.

pub fn slugify(s: &str) -> String {
    let mut slug: Vec<u8> = Vec::with_capacity(s.len());
    // Starts with true to avoid leading -
    let mut prev_is_dash = true;
    {
        let mut push_char = |x: char| match x {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' => {
                prev_is_dash = false;
                slug.push(x.to_ascii_lowercase() as u8);
            }
            _ => {
                if !prev_is_dash {
                    slug.push(b'-');
                    prev_is_dash = true;
                }
            }
        };

        for c in s.chars() {
            if c.is_ascii() {
                (push_char)(c);
            } else {
                for cx in deunicode::deunicode_char(c).unwrap_or("-").chars() {
                    (push_char)(cx);
                }
            }
        }
    }

    let mut string = String::from_utf8(slug).unwrap_or_default();
    if string.ends_with('-') {
        string.pop();
    }
    string
}
