use std::collections::HashSet;
use std::thread;

use secrand::{ByteSource, OsRng, RandomError, random_token, select_with, uniform_int_with};

#[test]
fn os_rng_fills_buffers() {
    let mut rng = OsRng::new();

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];
    rng.fill_bytes(&mut a).unwrap();
    rng.fill_bytes(&mut b).unwrap();

    assert!(a.iter().any(|&x| x != 0));
    assert_ne!(a, b);
}

#[test]
fn os_rng_accepts_empty_and_large_buffers() {
    let mut rng = OsRng;
    rng.fill_bytes(&mut []).unwrap();

    let mut big = vec![0u8; 1 << 20];
    rng.fill_bytes(&mut big).unwrap();
    assert!(big.iter().any(|&x| x != 0));
}

#[test]
fn sources_work_behind_references_and_trait_objects() {
    let mut rng = OsRng;
    let mut by_ref = &mut rng;
    assert!(uniform_int_with(&mut by_ref, 10u8).unwrap() < 10);

    let dynamic: &mut dyn ByteSource = &mut OsRng;
    assert!(uniform_int_with(&mut *dynamic, 10u8).unwrap() < 10);
    assert!(select_with(dynamic, &[1, 2, 3]).is_ok());
}

#[test]
fn concurrent_callers_get_independent_values() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (0..64).map(|_| random_token(16).unwrap()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for token in handle.join().unwrap() {
            assert!(seen.insert(token), "duplicate token across threads");
        }
    }

    assert_eq!(seen.len(), 8 * 64);
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(RandomError::InvalidBound.to_string(), "bound must be greater than zero");
    assert_eq!(RandomError::InvalidCharset.to_string(), "charset must not be empty");
    assert_eq!(
        RandomError::EmptyCollection.to_string(),
        "cannot select from an empty collection"
    );

    let err = RandomError::SourceUnavailable(std::io::Error::other("no entropy"));
    assert!(err.to_string().contains("no entropy"));
}
