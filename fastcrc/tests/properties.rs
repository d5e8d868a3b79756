//! Cross-cutting properties that must hold across every preset and kernel,
//! exercised only through the public API.

use fastcrc::{crc16, crc16_ccitt, crc32, crc64, crc64_iso, Engine, Kernel, Profile};

const ALL_KERNELS: [Kernel; 5] = Kernel::ALL;

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state & 0xFF) as u8
        })
        .collect()
}

#[test]
fn preset_known_answer_vectors() {
    let input = b"123456789";
    assert_eq!(crc16(input), 0xBB3D, "CRC-16/ARC");
    assert_eq!(crc16_ccitt(input), 0x29B1, "CRC-16/CCITT-FALSE");
    assert_eq!(crc32(input), 0xCBF4_3926, "CRC-32/IEEE");
    assert_eq!(crc64(input), 0x6C40_DF5F_0B49_7347, "CRC-64/ECMA");
    assert_eq!(crc64_iso(input), 0xB909_56C7_75A4_1001, "CRC-64/ISO");
}

#[test]
fn source_parity_across_presets_and_kernels() {
    // 40 bytes: long enough that Word8 (32-byte blocks) folds a full block
    // for every preset here, including the two CRC-64 variants, rather than
    // falling straight through to the byte-kernel tail.
    let input = random_bytes(40, 0x1234_5678);

    macro_rules! check_preset {
        ($profile:expr, $expected_fn:expr) => {{
            let reference = $expected_fn(input.as_slice());
            for &kernel in ALL_KERNELS.iter() {
                let mut engine = Engine::new($profile);
                engine.consume_with(&input, kernel);
                assert_eq!(engine.digest(), reference, "kernel {kernel:?} diverged");
            }
        }};
    }

    check_preset!(arc_profile(), |d: &[u8]| crc16(d));
    check_preset!(ccitt_false_profile(), |d: &[u8]| crc16_ccitt(d));
    check_preset!(crc32_ieee_profile(), |d: &[u8]| crc32(d));
    check_preset!(crc64_ecma_profile(), |d: &[u8]| crc64(d));
    check_preset!(crc64_iso_profile(), |d: &[u8]| crc64_iso(d));
}

#[test]
fn kernel_equivalence_over_many_sizes() {
    for &len in &[
        0, 1, 2, 3, 7, 15, 16, 31, 32, 63, 64, 65, 1023, 1024, 4096,
    ] {
        let data = random_bytes(len, 0xA5A5_5A5A_0000_0001 + len as u64);

        let mut reference_engine = Engine::new(crc32_ieee_profile());
        reference_engine.consume_with(&data, Kernel::Byte);
        let reference = reference_engine.digest();

        for &kernel in ALL_KERNELS.iter() {
            let mut engine = Engine::new(crc32_ieee_profile());
            engine.consume_with(&data, kernel);
            assert_eq!(engine.digest(), reference, "len {len} kernel {kernel:?}");
        }
    }
}

#[test]
fn split_consume_is_associative_across_kernels() {
    let data = random_bytes(2049, 777);

    let mut whole = Engine::new(crc64_ecma_profile());
    whole.consume(&data);
    let expected = whole.digest();

    let splits = [0, 1, 4, 63, 64, 127, 1024, 2048, 2049];
    for &split in &splits {
        let (a, b) = data.split_at(split);
        let mut engine = Engine::new(crc64_ecma_profile());
        engine.consume_with(a, ALL_KERNELS[split % ALL_KERNELS.len()]);
        engine.consume_with(b, ALL_KERNELS[(split + 1) % ALL_KERNELS.len()]);
        assert_eq!(engine.digest(), expected, "split at {split}");
    }
}

#[test]
fn reset_idempotence() {
    let profile = crc32_ieee_profile();
    // reflect_in == reflect_out here, so the reflect step cancels and the
    // empty digest reduces to `initial XOR xor_out` exactly.
    let expected = profile.initial ^ profile.xor_out;

    let mut engine = Engine::new(profile);
    assert_eq!(engine.digest(), expected);
    engine.consume(b"anything");
    engine.reset();
    assert_eq!(engine.digest(), expected);
}

#[test]
fn tune_does_not_perturb_subsequent_digest() {
    for &len in &[0usize, 1, 64, 4096] {
        let data = random_bytes(len, 0x9999 + len as u64);
        let mut tuned = Engine::new(crc32_ieee_profile());
        tuned.tune_with(512, 4);
        tuned.consume(&data);

        let mut fresh = Engine::new(crc32_ieee_profile());
        fresh.consume(&data);

        assert_eq!(tuned.digest(), fresh.digest(), "len {len}");
    }
}

#[test]
fn tune_does_not_perturb_subsequent_digest_for_64_bit_register() {
    // Tuning a u64 engine can select any of the five kernels, including
    // Word1 (routed internally to the byte kernel for this width) — make
    // sure that path is exercised here rather than only through Word8.
    for &len in &[0usize, 1, 4, 64, 4096] {
        let data = random_bytes(len, 0x1111 + len as u64);
        let mut tuned = Engine::new(crc64_ecma_profile());
        tuned.tune_with(512, 4);
        tuned.consume(&data);

        let mut fresh = Engine::new(crc64_ecma_profile());
        fresh.consume(&data);

        assert_eq!(tuned.digest(), fresh.digest(), "len {len}");
    }
}

#[test]
fn reflect_cancellation_before_xor_out() {
    let reflected = Profile::<u32>::new(
        "test/reflected",
        0x04C1_1DB7,
        0x0000_0000,
        0x0000_0000,
        true,
        true,
        Kernel::Byte,
    );
    let plain = Profile::<u32>::new(
        "test/plain",
        0x04C1_1DB7,
        0x0000_0000,
        0x0000_0000,
        false,
        false,
        Kernel::Byte,
    );

    let data = random_bytes(512, 0xDEAD_BEEF);
    let mut a = Engine::new(reflected);
    a.consume(&data);
    let mut b = Engine::new(plain);
    b.consume(&data);

    assert_eq!(a.digest(), b.digest().reverse_bits());
}

fn arc_profile() -> Profile<u16> {
    Profile::new("crc16/arc", 0x8005, 0x0000, 0x0000, true, true, Kernel::Word4)
}

fn ccitt_false_profile() -> Profile<u16> {
    Profile::new(
        "crc16/ccitt-false",
        0x1021,
        0xFFFF,
        0x0000,
        false,
        false,
        Kernel::Word4,
    )
}

fn crc32_ieee_profile() -> Profile<u32> {
    Profile::new(
        "crc32",
        0x04C1_1DB7,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        true,
        true,
        Kernel::Word8,
    )
}

fn crc64_ecma_profile() -> Profile<u64> {
    Profile::new(
        "crc64/ecma",
        0x42F0_E1EB_A9EA_3693,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        true,
        true,
        Kernel::Word8,
    )
}

fn crc64_iso_profile() -> Profile<u64> {
    Profile::new(
        "crc64/iso",
        0x0000_0000_0000_001B,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        true,
        true,
        Kernel::Word8,
    )
}
