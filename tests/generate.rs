use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use brevid::clock::FixedClock;
use brevid::environment::FixedEnvironment;
use brevid::fingerprint::{hash_to_fixed_digits, MAX_HEX_DIGITS};
use brevid::random::FixedRandom;
use brevid::{BrevId, BrevIdError, Config};

/// 2024-04-01T00:00:00Z
const MIDNIGHT: i64 = 1711929600;
/// 2024-04-01T12:00:00Z
const NOON: i64 = 1711972800;

fn frozen(config: Config) -> BrevId {
    BrevId::builder(config)
        .clock(FixedClock::at_timestamp(NOON))
        .random(FixedRandom(5))
        .environment(FixedEnvironment::new("ignored", 123))
        .host_fingerprint(500)
        .build()
        .expect("valid config")
}

fn config_error(config: Config) -> String {
    let err = BrevId::builder(config)
        .clock(FixedClock::at_timestamp(MIDNIGHT))
        .environment(FixedEnvironment::new("h", 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, BrevIdError::Config(_)));
    err.to_string()
}

fn ints(
    start_timestamp: i64,
    min_length: i64,
    time_magnitude: i64,
    host_magnitude: i64,
    rand_magnitude: i64,
) -> Config {
    Config::default()
        .with_start_timestamp(start_timestamp)
        .with_min_length(min_length)
        .with_time_magnitude(time_magnitude)
        .with_host_magnitude(host_magnitude)
        .with_rand_magnitude(rand_magnitude)
}

fn generate_many(gen: &BrevId, count: usize) -> Vec<String> {
    (0..count).map(|_| gen.generate().unwrap()).collect()
}

#[test]
fn deterministic_output_with_frozen_inputs() {
    assert_eq!(
        frozen(ints(0, 5, 1, 1, 1)).generate().unwrap(),
        "5y1wpm669718pwrk"
    );
    assert_eq!(
        frozen(ints(1711843200, 10, 5, 3, 5)).generate().unwrap(),
        "yuef4444sbg1xmpz"
    );
}

#[test]
fn repeated_calls_with_frozen_inputs_agree() {
    let gen = frozen(ints(0, 8, 2, 4, 3));
    assert_eq!(gen.generate().unwrap(), gen.generate().unwrap());
}

#[test]
fn bad_integer_parameters() {
    let cases = [
        (ints(-1, 5, 1, 1, 1), "startTimestamp: must be at least 0"),
        (ints(0, 2, 1, 1, 1), "minLength: must be at least 3"),
        (
            ints(0, 256, 1, 1, 1),
            "minLength: cannot be greater than 255",
        ),
        (ints(0, 5, 0, 1, 1), "timeMagnitude: must be at least 1"),
        (
            ints(0, 5, 10, 1, 1),
            "timeMagnitude: cannot be greater than 5",
        ),
        (ints(0, 5, 1, 0, 1), "hostMagnitude: must be at least 1"),
        (ints(0, 5, 1, 1, 0), "randMagnitude: must be at least 1"),
        (
            ints(0, 5, 1, 1, 100),
            "randMagnitude: cannot be greater than 10",
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config_error(config), format!("Invalid {}", expected));
    }

    assert_eq!(
        config_error(ints(2713203137, 5, 1, 1, 1)),
        format!(
            "Invalid startTimestamp: cannot be greater than {}",
            MIDNIGHT
        )
    );
    assert_eq!(
        config_error(ints(0, 5, 1, 16, 1)),
        format!(
            "Invalid hostMagnitude: cannot be greater than {}",
            MAX_HEX_DIGITS
        )
    );
}

#[test]
fn bad_character_sets() {
    let short = config_error(ints(0, 5, 1, 1, 1).with_character_set("a"));
    let repeated = config_error(ints(0, 5, 1, 1, 1).with_character_set("abcabc"));
    let wide = config_error(ints(0, 5, 1, 1, 1).with_character_set("abcß"));

    assert_eq!(
        short,
        "Invalid character set: Character set length must be at least 3"
    );
    assert_eq!(
        repeated,
        "Invalid character set: Character set must contain unique characters"
    );
    assert_eq!(
        wide,
        "Invalid character set: Character set cannot contain multibyte characters"
    );
}

#[test]
fn output_respects_length_and_alphabet() {
    let alphabets = [
        "abcdefghjkmnpqrstuwxyz123456789",
        "0123456789",
        "xyz",
        "ABCDEFabcdef!#",
    ];
    let lengths = [3, 5, 16, 64, 255];

    for alphabet in alphabets {
        let allowed: HashSet<char> = alphabet.chars().collect();
        for min_length in lengths {
            let config = Config::default()
                .with_min_length(min_length)
                .with_time_magnitude(3)
                .with_host_magnitude(4)
                .with_rand_magnitude(6)
                .with_character_set(alphabet);
            let gen = BrevId::new(config).unwrap();
            for _ in 0..10 {
                let id = gen.generate().unwrap();
                assert!(id.len() >= min_length as usize, "{} too short", id);
                assert!(
                    id.chars().all(|c| allowed.contains(&c)),
                    "{} uses foreign chars",
                    id
                );
            }
        }
    }
}

#[test]
fn system_generator_uses_real_identity() {
    let config = Config::default().with_host_magnitude(6);
    let gen = BrevId::new(config).unwrap();
    assert_eq!(gen.pid(), std::process::id());
    let fingerprint = gen.hashed_hostname();
    assert!((100_000..1_000_000).contains(&fingerprint));
    assert_eq!(gen.hashed_hostname(), fingerprint);
}

#[test]
fn fingerprint_regression_vector() {
    assert_eq!(hash_to_fixed_digits("abcd", 2).unwrap(), 48);
}

#[test]
fn concurrent_generation_rarely_collides() {
    let config = Config::default()
        .with_time_magnitude(5)
        .with_rand_magnitude(10)
        .with_min_length(10);
    let gen = Arc::new(BrevId::new(config).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let gen = Arc::clone(&gen);
            thread::spawn(move || generate_many(&gen, 250))
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            seen.insert(id);
        }
    }
    // 10^10 random values per 100 microsecond tick.
    assert!(
        seen.len() >= 995,
        "too many collisions: {} unique",
        seen.len()
    );
}

#[test]
fn environment_failure_is_reported() {
    let err = BrevId::builder(Config::default())
        .environment(FixedEnvironment::without_hostname(1))
        .build()
        .unwrap_err();
    assert!(err.to_string().starts_with("Unable to determine hostname"));
}
