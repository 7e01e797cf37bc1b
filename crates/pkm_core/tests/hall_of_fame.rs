use proptest::prelude::*;

use pkm_core::CodecErrorCode;
use pkm_core::hall_of_fame::{
    ENTRY_SIZE, HallOfFame3, MEMBER_SIZE, NICKNAME_LEN, TEAM_SIZE, merge_blocks, split_blocks,
};
use pkm_core::layout::{ByteRange, SplitLayout};
use pkm_core::text::TextCodec;
use pkm_core::trainer::TrainerInfo;

const LAYOUT: SplitLayout = SplitLayout::EMERALD_HALL_OF_FAME;
const CONTAINER_LEN: usize = 0x20000;

/// Maps ASCII capitals onto the Gen 3 letter block (A = 0xBB).
struct UpperCaseCodec;

impl TextCodec for UpperCaseCodec {
    fn decode(&self, bytes: &[u8], _japanese: bool) -> String {
        bytes
            .iter()
            .take_while(|&&b| b != 0xFF)
            .map(|&b| char::from(b - 0xBB + b'A'))
            .collect()
    }

    fn encode(&self, text: &str, max_len: usize, _japanese: bool) -> Vec<u8> {
        let mut out: Vec<u8> = text
            .bytes()
            .take(max_len)
            .map(|b| b - b'A' + 0xBB)
            .collect();
        out.resize(max_len, 0xFF);
        out
    }
}

fn container() -> Vec<u8> {
    vec![0u8; CONTAINER_LEN]
}

#[test]
fn layout_has_room_for_fifty_teams() {
    assert_eq!(ENTRY_SIZE, TEAM_SIZE * MEMBER_SIZE);
    assert!(LAYOUT.scratch_len() >= 50 * ENTRY_SIZE);

    let hof = HallOfFame3::read(&container(), LAYOUT, false).expect("read should succeed");
    assert_eq!(hof.entry_count(), 50);
    assert_eq!(hof.entries().expect("entries").len(), 50);
    assert_eq!(hof.scratch().len(), LAYOUT.scratch_len());
}

#[test]
fn first_member_reads_from_block_a() {
    let mut sav = container();
    let base = LAYOUT.block_a.start;
    sav[base..base + 2].copy_from_slice(&12345u16.to_le_bytes());
    sav[base + 2..base + 4].copy_from_slice(&54321u16.to_le_bytes());
    sav[base + 4..base + 8].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
    // Pikachu, level 42
    sav[base + 8..base + 10].copy_from_slice(&((42u16 << 9) | 25).to_le_bytes());

    let hof = HallOfFame3::read(&sav, LAYOUT, false).expect("read should succeed");
    let entry = hof.entry(0).expect("entry 0");
    let member = entry.member(0).expect("member 0");
    assert_eq!(member.tid(), 12345);
    assert_eq!(member.sid(), 54321);
    assert_eq!(member.pid(), 0xDEAD_BEEF);
    assert_eq!(member.species(), 25);
    assert_eq!(member.level(), 42);
    assert!(!entry.is_empty());
}

#[test]
fn entries_are_laid_out_back_to_back() {
    let mut sav = container();
    let second = LAYOUT.block_a.start + ENTRY_SIZE + 8;
    sav[second..second + 2].copy_from_slice(&1u16.to_le_bytes());

    let hof = HallOfFame3::read(&sav, LAYOUT, false).expect("read should succeed");
    assert!(hof.entry(0).expect("entry 0").is_empty());
    let entry = hof.entry(1).expect("entry 1");
    assert_eq!(entry.offset(), ENTRY_SIZE);
    assert_eq!(entry.member(0).expect("member").species(), 1);
}

#[test]
fn member_straddling_the_block_boundary_writes_both_blocks() {
    let mut sav = container();
    let mut hof = HallOfFame3::read(&sav, LAYOUT, false).expect("read should succeed");

    // Entry 33 starts at 3960; its first member runs 3960..3980 across 0xF80.
    let boundary = LAYOUT.block_a.len();
    let index = boundary / ENTRY_SIZE;
    assert!(index * ENTRY_SIZE < boundary && boundary < index * ENTRY_SIZE + MEMBER_SIZE);

    {
        let mut entry = hof.entry_mut(index).expect("entry");
        let mut member = entry.member_mut(0).expect("member");
        member.set_pid(0x0102_0304);
        member.set_species(386);
        member.set_level(70);
    }
    hof.write_back(&mut sav).expect("write back should succeed");

    let pid_at = LAYOUT.block_a.start + index * ENTRY_SIZE + 4;
    assert_eq!(&sav[pid_at..pid_at + 4], &0x0102_0304u32.to_le_bytes());
    assert_eq!(pid_at + 4, LAYOUT.block_a.end);

    let word_at = LAYOUT.block_b.start;
    let word = u16::from_le_bytes([sav[word_at], sav[word_at + 1]]);
    assert_eq!(word & 0x1FF, 386);
    assert_eq!(word >> 9, 70);

    let reread = HallOfFame3::read(&sav, LAYOUT, false).expect("re-read should succeed");
    let member = reread.entry(index).and_then(|e| e.member(0).map(|m| (m.species(), m.level())));
    assert_eq!(member, Ok((386, 70)));
}

#[test]
fn national_species_is_translated_on_the_way_in_and_out() {
    let sav = container();
    let mut hof = HallOfFame3::read(&sav, LAYOUT, false).expect("read should succeed");
    let mut entry = hof.entry_mut(0).expect("entry");
    let mut member = entry.member_mut(2).expect("member");

    member.set_national_species(252);
    assert_eq!(member.species(), 277);
    assert_eq!(member.national_species(), 252);

    member.set_national_species(387);
    assert_eq!(member.species(), 0);
}

#[test]
fn nickname_goes_through_the_text_codec() {
    let sav = container();
    let mut hof = HallOfFame3::read(&sav, LAYOUT, true).expect("read should succeed");
    let mut entry = hof.entry_mut(4).expect("entry");
    let mut member = entry.member_mut(5).expect("member");
    assert!(member.japanese());

    member.set_nickname(&UpperCaseCodec, "PIKA");
    assert_eq!(member.nickname_bytes().len(), NICKNAME_LEN);
    assert_eq!(member.nickname_bytes()[4], 0xFF);
    assert_eq!(member.nickname(&UpperCaseCodec), "PIKA");
}

#[test]
fn trainer_and_clear_write_through() {
    let sav = container();
    let mut hof = HallOfFame3::read(&sav, LAYOUT, false).expect("read should succeed");
    let trainer = TrainerInfo::default();
    {
        let mut entry = hof.entry_mut(0).expect("entry");
        let mut member = entry.member_mut(0).expect("member");
        member.apply_trainer(&trainer);
        member.set_species(1);
    }
    assert_eq!(hof.entry(0).and_then(|e| e.member(0).map(|m| m.tid())), Ok(12345));
    assert_eq!(hof.recorded_entries().map(|e| e.len()), Ok(1));

    hof.entry_mut(0).expect("entry").clear();
    assert!(hof.scratch()[..ENTRY_SIZE].iter().all(|&b| b == 0));
    assert_eq!(hof.recorded_entries().map(|e| e.len()), Ok(0));
}

#[test]
fn out_of_range_indexes_are_rejected() {
    let sav = container();
    let hof = HallOfFame3::read(&sav, LAYOUT, false).expect("read should succeed");
    let err = hof.entry(50).expect_err("entry 50 should be rejected");
    assert_eq!(err.code, CodecErrorCode::OutOfRange);

    let entry = hof.entry(0).expect("entry 0");
    let err = entry.member(TEAM_SIZE).expect_err("member 6 should be rejected");
    assert_eq!(err.code, CodecErrorCode::OutOfRange);
}

#[test]
fn short_container_is_rejected() {
    let sav = vec![0u8; LAYOUT.block_b.start];
    let err = HallOfFame3::read(&sav, LAYOUT, false).expect_err("short container");
    assert_eq!(err.code, CodecErrorCode::Truncated);
}

#[test]
fn size_mismatch_never_writes() {
    let mut sav = vec![0xAAu8; CONTAINER_LEN];
    let scratch = vec![0u8; LAYOUT.scratch_len() - 1];
    let err = split_blocks(&scratch, &mut sav, &LAYOUT).expect_err("length mismatch");
    assert_eq!(err.code, CodecErrorCode::SizeMismatch);
    assert!(sav.iter().all(|&b| b == 0xAA));
}

#[test]
fn undersized_layout_is_rejected() {
    let layout = SplitLayout {
        block_a: ByteRange::new(0, 0x100),
        block_b: ByteRange::new(0x200, 0x100),
        logical_len: 50 * ENTRY_SIZE,
    };
    let err = merge_blocks(&container(), &layout).expect_err("layout too small");
    assert_eq!(err.code, CodecErrorCode::InvalidLayout);
}

proptest! {
    #[test]
    fn split_then_merge_reproduces_the_scratch(
        size_a in 1usize..64,
        size_b in 1usize..64,
        gap in 0usize..16,
        fill in proptest::collection::vec(any::<u8>(), 256),
        pick in any::<prop::sample::Index>(),
        value: u8,
    ) {
        let layout = SplitLayout {
            block_a: ByteRange::new(8, size_a),
            block_b: ByteRange::new(8 + size_a + gap, size_b),
            logical_len: 0,
        };
        let mut sav = fill.clone();

        let mut scratch = merge_blocks(&sav, &layout).expect("merge");
        let at = pick.index(scratch.len());
        scratch[at] = value;

        split_blocks(&scratch, &mut sav, &layout).expect("split");
        prop_assert_eq!(merge_blocks(&sav, &layout).expect("re-merge"), scratch);
        prop_assert_eq!(&sav[..8], &fill[..8]);
    }
}
