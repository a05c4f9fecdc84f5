#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;

use fibsvc_core::{paginate, FibError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // total in 0..2048, page in -2..254, page_size in -2..254
    let total = i64::from(u16::from_le_bytes([data[0], data[1]]) % 2048);
    let page = i64::from(data[2]) - 2;
    let page_size = i64::from(data[3]) - 2;
    let exclusions: BTreeSet<u64> = data[4..]
        .chunks(2)
        .map(|c| u64::from(u16::from_le_bytes([c[0], *c.get(1).unwrap_or(&0)]) % 2100))
        .collect();

    let result = paginate(total, page, page_size, &exclusions);
    if total <= 0 || page <= 0 || page_size <= 0 {
        assert!(result.is_err());
        return;
    }

    #[allow(clippy::cast_sign_loss)]
    let (total, page, page_size) = (total as u64, page as u64, page_size as u64);
    let filtered: Vec<u64> = (1..=total).filter(|i| !exclusions.contains(i)).collect();
    let total_pages = (filtered.len() as u64).div_ceil(page_size);

    match result {
        Ok(p) => {
            assert_eq!(p.total_pages, total_pages);
            let expected: Vec<u64> = filtered
                .iter()
                .copied()
                .skip(((page - 1) * page_size) as usize)
                .take(page_size as usize)
                .collect();
            assert_eq!(p.indices, expected);
        }
        Err(FibError::PageExceedsTotalPages { page: got, total_pages: tp }) => {
            assert!(total_pages > 0 && page > total_pages);
            assert_eq!((got, tp), (page, total_pages));
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
