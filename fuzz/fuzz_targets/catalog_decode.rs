#![no_main]

use libfuzzer_sys::fuzz_target;
use nouns_seeder::TraitCatalog;

fuzz_target!(|data: &[u8]| {
    // Fuzz the catalog loader with arbitrary input
    let Ok(s) = core::str::from_utf8(data) else { return };
    if let Ok(catalog) = TraitCatalog::from_json(s) {
        assert!(catalog.windows_disjoint());
    }
});
