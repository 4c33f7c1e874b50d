use cryptal_mac::{Poly1305, auth};
use poly1305::universal_hash::KeyInit;
use proptest::collection::vec;
use proptest::prelude::*;

/// Tag computed by the RustCrypto implementation, used as an oracle.
fn reference_tag(key: &[u8; 32], msg: &[u8]) -> [u8; 16] {
    let mac = poly1305::Poly1305::new(poly1305::Key::from_slice(key));
    mac.compute_unpadded(msg).into()
}

/// Splits `msg` at the given (unsorted, possibly repeated) cut points.
fn split_at_cuts<'a>(msg: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (msg.len() + 1)).collect();
    points.sort_unstable();

    let mut chunks = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for point in points {
        chunks.push(&msg[start..point]);
        start = point;
    }
    chunks.push(&msg[start..]);

    chunks
}

proptest! {
    #[test]
    fn chunking_does_not_change_tag(
        key in any::<[u8; 32]>(),
        msg in vec(any::<u8>(), 0..300),
        cuts in vec(any::<usize>(), 0..12),
    ) {
        let whole = auth(&key, &msg).unwrap();

        let mut mac = Poly1305::new(&key).unwrap();
        for chunk in split_at_cuts(&msg, &cuts) {
            prop_assert_eq!(mac.write(chunk), chunk.len());
        }

        prop_assert_eq!(mac.tag(), whole);
    }

    #[test]
    fn matches_reference_implementation(
        key in any::<[u8; 32]>(),
        msg in vec(any::<u8>(), 0..600),
    ) {
        let tag = auth(&key, &msg).unwrap();

        prop_assert_eq!(tag.to_bytes(), reference_tag(&key, &msg));
    }

    #[test]
    fn intermediate_sums_match_prefix_tags(
        key in any::<[u8; 32]>(),
        msg in vec(any::<u8>(), 1..100),
        step in 1usize..40,
    ) {
        let mut mac = Poly1305::new(&key).unwrap();

        for (i, chunk) in msg.chunks(step).enumerate() {
            mac.write(chunk);
            let end = ((i + 1) * step).min(msg.len());

            prop_assert_eq!(mac.sum(&[]), reference_tag(&key, &msg[..end]).to_vec());
        }
    }
}

#[test]
fn saturated_limbs_match_reference() {
    // All-ones keys and messages push every limb to its carry limits.
    let key = [0xFFu8; 32];

    for len in 0..=256 {
        let msg = vec![0xFFu8; len];
        assert_eq!(
            auth(&key, &msg).unwrap().to_bytes(),
            reference_tag(&key, &msg),
            "length {len}"
        );
    }
}

#[test]
fn large_message_matches_reference() {
    let key: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
    let msg: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();

    let mut mac = Poly1305::new(&key).unwrap();
    for chunk in msg.chunks(4093) {
        mac.write(chunk);
    }

    assert_eq!(mac.tag().to_bytes(), reference_tag(&key, &msg));
}
