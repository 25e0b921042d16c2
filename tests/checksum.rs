use rstest::rstest;
use teleinfo::sans::check::{Checksum, Scheme, compute_checksum};

#[rstest]
#[case(b"OPTARIF BASE", b'0')]
#[case(b"ISOUSC 30", b'9')]
#[case(b"PTEC TH..", b'$')]
#[case(b"ADCO 012345678901", b'E')]
#[case(b"ADCO\t012345678901\t", b'7')]
#[case(b"", b' ')]
fn compute_known_checksums(#[case] r: &[u8], #[case] expected: u8) {
    assert_eq!(compute_checksum(r), expected);
}

#[test]
fn compute_wraps_sum() {
    // 0xFF * 4 wraps to 0xFC; low six bits are 0x3C.
    assert_eq!(compute_checksum(&[0xFF; 4]), 0x3C + 0x20);
}

#[rstest]
#[case(b"ADCO 012345678901 E", Scheme::A)]
#[case(b"IINST 002 Y", Scheme::A)]
#[case(b"ADCO\t012345678901\t7", Scheme::B)]
#[case(b"DATE\t230101120000\tsomevalue\t4", Scheme::B)]
fn detect_scheme(#[case] r: &[u8], #[case] scheme: Scheme) {
    let mut checksum = Checksum::new();
    assert_eq!(checksum.scheme(), None);
    assert!(checksum.validate(r));
    assert_eq!(checksum.scheme(), Some(scheme));
}

#[test]
fn cached_scheme_is_not_redetected() {
    let mut checksum = Checksum::new();
    assert!(checksum.validate(b"ADCO 012345678901 E"));

    // Valid only under scheme B, which is no longer tried.
    assert!(Scheme::B.validate(b"ADCO\t012345678901\t7"));
    assert!(!checksum.validate(b"ADCO\t012345678901\t7"));
    assert_eq!(checksum.scheme(), Some(Scheme::A));

    assert!(checksum.validate(b"IINST 002 Y"));
}

#[test]
fn failed_detection_is_retried() {
    let mut checksum = Checksum::new();

    assert!(!checksum.validate(b"ADCO 012345678901 F"));
    assert_eq!(checksum.scheme(), None);

    assert!(checksum.validate(b"ADCO\t012345678901\t7"));
    assert_eq!(checksum.scheme(), Some(Scheme::B));
}

#[test]
fn reset_forgets_scheme() {
    let mut checksum = Checksum::new();
    assert!(checksum.validate(b"ADCO 012345678901 E"));

    checksum.reset();
    assert_eq!(checksum.scheme(), None);

    assert!(checksum.validate(b"ADCO\t012345678901\t7"));
    assert_eq!(checksum.scheme(), Some(Scheme::B));
}

#[rstest]
#[case(b"")]
#[case(b"E")]
fn too_short_for_any_scheme(#[case] r: &[u8]) {
    assert!(!Scheme::A.validate(r));
    assert!(!Checksum::new().validate(r));
}
