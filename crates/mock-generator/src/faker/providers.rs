//! Built-in faker methods.
//!
//! Each method is a zero-argument generator in the registry's sense: the
//! only input is the shared RNG.

use super::pools::*;
use rand::{Rng, RngCore};

fn pick<T: Copy>(rng: &mut dyn RngCore, pool: &[T]) -> T {
    pool[rng.random_range(0..pool.len())]
}

/// Replace every `#` with a random digit and every `%` with a non-zero digit.
pub fn numerify(pattern: &str, rng: &mut dyn RngCore) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.random_range(0..10u8)),
            '%' => char::from(b'0' + rng.random_range(1..10u8)),
            other => other,
        })
        .collect()
}

pub fn first_name(rng: &mut dyn RngCore) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name(rng: &mut dyn RngCore) -> String {
    pick(rng, LAST_NAMES).to_string()
}

pub fn name(rng: &mut dyn RngCore) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn user_name(rng: &mut dyn RngCore) -> String {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();
    match rng.random_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{}", numerify("##", rng)),
        _ => format!("{}{last}", &first[..1]),
    }
}

pub fn domain_name(rng: &mut dyn RngCore) -> String {
    format!(
        "{}.{}",
        pick(rng, LAST_NAMES).to_lowercase(),
        pick(rng, TLDS)
    )
}

pub fn email(rng: &mut dyn RngCore) -> String {
    let user = user_name(rng);
    let domain = if rng.random_bool(0.5) {
        pick(rng, FREE_EMAIL_DOMAINS).to_string()
    } else {
        domain_name(rng)
    };
    format!("{user}@{domain}")
}

pub fn free_email(rng: &mut dyn RngCore) -> String {
    format!("{}@{}", user_name(rng), pick(rng, FREE_EMAIL_DOMAINS))
}

pub fn url(rng: &mut dyn RngCore) -> String {
    format!("https://www.{}/", domain_name(rng))
}

pub fn company(rng: &mut dyn RngCore) -> String {
    match rng.random_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub fn job(rng: &mut dyn RngCore) -> String {
    pick(rng, JOBS).to_string()
}

pub fn city(rng: &mut dyn RngCore) -> String {
    pick(rng, CITIES).to_string()
}

pub fn state(rng: &mut dyn RngCore) -> String {
    pick(rng, STATES).0.to_string()
}

pub fn state_abbr(rng: &mut dyn RngCore) -> String {
    pick(rng, STATES).1.to_string()
}

pub fn country(rng: &mut dyn RngCore) -> String {
    pick(rng, COUNTRIES).to_string()
}

pub fn postcode(rng: &mut dyn RngCore) -> String {
    numerify("#####", rng)
}

pub fn street_address(rng: &mut dyn RngCore) -> String {
    format!(
        "{} {} {}",
        numerify("%##", rng),
        pick(rng, LAST_NAMES),
        pick(rng, STREET_SUFFIXES)
    )
}

/// Single-line postal address.
pub fn address(rng: &mut dyn RngCore) -> String {
    format!(
        "{}, {}, {} {}",
        street_address(rng),
        pick(rng, CITIES),
        pick(rng, STATES).1,
        postcode(rng)
    )
}

pub fn phone_number(rng: &mut dyn RngCore) -> String {
    numerify("(%##) %##-####", rng)
}

pub fn word(rng: &mut dyn RngCore) -> String {
    pick(rng, WORDS).to_string()
}

/// Capitalized sentence of 4 to 10 words.
pub fn sentence(rng: &mut dyn RngCore) -> String {
    let count = rng.random_range(4..=10);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, WORDS)).collect();
    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

pub fn color_name(rng: &mut dyn RngCore) -> String {
    pick(rng, COLOR_NAMES).to_string()
}

pub fn currency_code(rng: &mut dyn RngCore) -> String {
    pick(rng, CURRENCY_CODES).to_string()
}

pub fn ipv4(rng: &mut dyn RngCore) -> String {
    let octets: [u8; 4] = [
        rng.random_range(1..=223),
        rng.random(),
        rng.random(),
        rng.random_range(1..=254),
    ];
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Random (version 4) UUID drawn from the shared RNG, so seeded runs repeat.
pub fn uuid4(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}
