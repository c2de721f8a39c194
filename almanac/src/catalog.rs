//! The constant catalog: name search, unit resolution, and mutation

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use almanac_core::text::squash_name;
use almanac_units::UnitConverter;

use crate::builtin;
use crate::entry::{ConstantEntry, UnitSystem};
use crate::error::CatalogError;
use crate::status::FindStatus;

/// One catalog slot: the entry plus its quantity-group id.
///
/// Unit variants of the same physical quantity share a group id, so
/// de-duplication is a key comparison rather than an adjacency scan.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) entry: ConstantEntry,
    group: u64,
}

/// Result of [`ConstantCatalog::find`]
#[derive(Debug, Clone)]
pub struct FindResult {
    pub status: FindStatus,
    pub entries: Vec<ConstantEntry>,
}

/// Ordered collection of constant entries with unit-aware search.
///
/// The converter is injected at construction; the catalog itself never
/// decides how conversion works, only when to ask for it.
pub struct ConstantCatalog {
    pub(crate) slots: Vec<Slot>,
    converter: Box<dyn UnitConverter>,
    next_group: u64,
}

impl ConstantCatalog {
    /// Catalog seeded with the built-in constant table
    pub fn new(converter: Box<dyn UnitConverter>) -> Self {
        Self::with_entries(converter, builtin::seed_entries())
    }

    /// Catalog with no entries, for tests and bespoke tables
    pub fn empty(converter: Box<dyn UnitConverter>) -> Self {
        ConstantCatalog {
            slots: Vec::new(),
            converter,
            next_group: 0,
        }
    }

    /// Catalog seeded from `entries`.
    ///
    /// Consecutive entries with an identical name list are unit variants of
    /// one quantity and are assigned the same group id.
    pub fn with_entries(converter: Box<dyn UnitConverter>, entries: Vec<ConstantEntry>) -> Self {
        let mut catalog = Self::empty(converter);
        for entry in entries {
            let group = match catalog.slots.last() {
                Some(last) if last.entry.names == entry.names => last.group,
                _ => catalog.fresh_group(),
            };
            catalog.slots.push(Slot { entry, group });
        }
        catalog
    }

    fn fresh_group(&mut self) -> u64 {
        let group = self.next_group;
        self.next_group += 1;
        group
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ConstantEntry> {
        self.slots.iter().map(|slot| &slot.entry)
    }

    /// Search by name and requested unit.
    ///
    /// Pass 1 compares the squashed query to every squashed alias,
    /// case-insensitively; if nothing hits, pass 2 retries the query as a
    /// wildcard pattern searched anywhere inside each alias. Unit
    /// resolution then follows the match count: single matches fall back to
    /// conversion before reporting a mismatch, multiple matches are
    /// filtered by unit compatibility and de-duplicated by quantity group.
    ///
    /// Never fails: every outcome is a [`FindStatus`]. `verbosity` ≥ 1
    /// emits debug diagnostics, ≥ 2 per-candidate trace detail; results do
    /// not depend on it.
    pub fn find(&self, name: &str, unit: &str, verbosity: u8) -> FindResult {
        let query = squash_name(name);
        if verbosity >= 1 {
            debug!(raw = name, squashed = %query, unit, "find: query");
        }

        // Pass 1: exact alias comparison, one hit per entry
        let mut exact = true;
        let mut indexes: Vec<usize> = Vec::new();
        for (i, slot) in self.slots.iter().enumerate() {
            for alias in &slot.entry.names {
                if query.eq_ignore_ascii_case(&squash_name(alias)) {
                    if verbosity >= 2 {
                        trace!(index = i, alias, "find: exact hit");
                    }
                    indexes.push(i);
                    break;
                }
            }
        }

        // Pass 2: wildcard pattern, only when pass 1 came up empty
        if indexes.is_empty() {
            exact = false;
            if let Some(re) = wildcard_regex(&query) {
                for (i, slot) in self.slots.iter().enumerate() {
                    for alias in &slot.entry.names {
                        if re.is_match(&squash_name(alias)) {
                            if verbosity >= 2 {
                                trace!(index = i, alias, "find: pattern hit");
                            }
                            indexes.push(i);
                            break;
                        }
                    }
                }
            }
        }

        if verbosity >= 1 {
            debug!(count = indexes.len(), exact, "find: name matches");
        }

        if indexes.is_empty() {
            return FindResult {
                status: FindStatus::NoMatches,
                entries: Vec::new(),
            };
        }

        if indexes.len() == 1 {
            return self.resolve_single(indexes[0], unit, exact, verbosity);
        }
        self.resolve_multi(&indexes, unit, exact, verbosity)
    }

    /// Unit resolution for a single name match
    fn resolve_single(&self, index: usize, unit: &str, exact: bool, verbosity: u8) -> FindResult {
        let entry = &self.slots[index].entry;

        // A direct unit match never converts; the stored value comes back
        // bit-for-bit.
        if unit_match(unit, entry) {
            return FindResult {
                status: FindStatus::unit_ok(exact, 1),
                entries: vec![entry.clone()],
            };
        }

        if !unit.is_empty() {
            if verbosity >= 1 {
                debug!(from = %entry.unit, to = unit, "find: attempting conversion");
            }
            if let Ok(converted) = self.converter.convert(&entry.unit, unit, entry.value) {
                return FindResult {
                    status: FindStatus::unit_ok(exact, 1),
                    entries: vec![entry.with_converted(converted, unit)],
                };
            }
        }

        FindResult {
            status: FindStatus::unit_mismatch(exact, 1),
            entries: vec![entry.clone()],
        }
    }

    /// Unit resolution for several name matches
    fn resolve_multi(&self, indexes: &[usize], unit: &str, exact: bool, verbosity: u8) -> FindResult {
        // No unit requested: report everything as-is
        if unit.is_empty() {
            let entries = indexes
                .iter()
                .map(|&i| self.slots[i].entry.clone())
                .collect();
            return FindResult {
                status: FindStatus::multi_no_unit(exact),
                entries,
            };
        }

        // Keep the compatible subset, one entry per quantity group
        let mut entries = Vec::new();
        let mut seen_groups = Vec::new();
        for &i in indexes {
            let slot = &self.slots[i];
            if unit_match(unit, &slot.entry) && !seen_groups.contains(&slot.group) {
                seen_groups.push(slot.group);
                entries.push(slot.entry.clone());
            }
        }
        if !entries.is_empty() {
            return FindResult {
                status: FindStatus::unit_ok(exact, entries.len()),
                entries,
            };
        }

        // Nothing compatible: try converting each match, skipping a
        // candidate whose group already produced the previous success
        if verbosity >= 1 {
            debug!(unit, "find: no compatible units, converting");
        }
        let mut entries = Vec::new();
        let mut last_group = None;
        for &i in indexes {
            let slot = &self.slots[i];
            if last_group == Some(slot.group) {
                continue;
            }
            if let Ok(converted) = self.converter.convert(&slot.entry.unit, unit, slot.entry.value)
            {
                entries.push(slot.entry.with_converted(converted, unit));
                last_group = Some(slot.group);
            }
        }
        if !entries.is_empty() {
            return FindResult {
                status: FindStatus::unit_ok(exact, entries.len()),
                entries,
            };
        }

        // Conversion failed everywhere: report the matches unconverted
        let mut entries = Vec::new();
        let mut last_group = None;
        for &i in indexes {
            let slot = &self.slots[i];
            if last_group != Some(slot.group) {
                entries.push(slot.entry.clone());
                last_group = Some(slot.group);
            }
        }
        FindResult {
            status: FindStatus::unit_mismatch(exact, entries.len()),
            entries,
        }
    }

    /// Look up the one value matching `name` in `unit`.
    ///
    /// Any outcome other than a single unit-resolved match is an error
    /// carrying the raw status.
    pub fn find_unique(&self, name: &str, unit: &str) -> Result<f64, CatalogError> {
        let result = self.find(name, unit, 0);
        match result.entries.first() {
            Some(entry) if result.status.is_unique_unit_ok() => Ok(entry.value),
            _ => Err(CatalogError::AmbiguousOrNotFound {
                name: name.to_string(),
                unit: unit.to_string(),
                status: result.status,
            }),
        }
    }

    /// Append an entry.
    ///
    /// Duplicate detection is exact string comparison across every alias in
    /// the catalog, not normalized comparison. All-or-nothing.
    pub fn add(&mut self, entry: ConstantEntry) -> Result<(), CatalogError> {
        if entry.names.is_empty() {
            return Err(CatalogError::EmptyNames);
        }
        for slot in &self.slots {
            for existing in &slot.entry.names {
                if entry.names.iter().any(|n| n == existing) {
                    return Err(CatalogError::DuplicateName(existing.clone()));
                }
            }
        }
        debug!(name = %entry.name(), value = entry.value, "adding constant");
        let group = self.fresh_group();
        self.slots.push(Slot { entry, group });
        Ok(())
    }

    /// Remove the entry answering to `name` (exact string comparison).
    ///
    /// Refuses to remove anything when several entries match.
    pub fn remove(&mut self, name: &str) -> Result<(), CatalogError> {
        let matching: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.entry.names.iter().any(|n| n == name))
            .map(|(i, _)| i)
            .collect();
        match matching[..] {
            [] => Err(CatalogError::NotFound(name.to_string())),
            [index] => {
                debug!(name, "removing constant");
                self.slots.remove(index);
                Ok(())
            }
            _ => Err(CatalogError::AmbiguousDelete {
                name: name.to_string(),
                count: matching.len(),
            }),
        }
    }
}

/// Unit-compatibility rule for a requested unit string against an entry
fn unit_match(requested: &str, entry: &ConstantEntry) -> bool {
    if requested.eq_ignore_ascii_case("any") {
        return true;
    }
    if requested.is_empty() || requested.eq_ignore_ascii_case("none") {
        return entry.unit_system == UnitSystem::None;
    }
    if requested.eq_ignore_ascii_case("mks") {
        return matches!(entry.unit_system, UnitSystem::Mks | UnitSystem::None);
    }
    if requested.eq_ignore_ascii_case("cgs") {
        return matches!(entry.unit_system, UnitSystem::Cgs | UnitSystem::None);
    }
    requested.eq_ignore_ascii_case(&entry.unit)
}

/// Compile the squashed query as a shell-style wildcard: `*` matches any
/// sequence, `?` any single character, everything else is literal. The
/// pattern is searched anywhere in the alias.
fn wildcard_regex(query: &str) -> Option<Regex> {
    let mut pattern = String::new();
    for c in query.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_units::{ConversionError, DimensionalConverter};

    /// Converter that always fails, for isolating the no-conversion paths
    struct NoConverter;

    impl UnitConverter for NoConverter {
        fn convert(&self, _from: &str, _to: &str, _value: f64) -> Result<f64, ConversionError> {
            Err(ConversionError::EmptyUnit)
        }
    }

    /// Converter that doubles every value, to prove direct matches skip it
    struct DoublingConverter;

    impl UnitConverter for DoublingConverter {
        fn convert(&self, _from: &str, _to: &str, value: f64) -> Result<f64, ConversionError> {
            Ok(value * 2.0)
        }
    }

    fn entry(names: &[&str], unit: &str, system: UnitSystem, value: f64) -> ConstantEntry {
        ConstantEntry::new(names, unit, system, value, "test", [0; 7])
    }

    fn light_catalog(converter: Box<dyn UnitConverter>) -> ConstantCatalog {
        ConstantCatalog::with_entries(
            converter,
            vec![
                entry(&["speed of light", "c"], "m/s", UnitSystem::Mks, 2.998e8),
                entry(&["speed of light", "c"], "cm/s", UnitSystem::Cgs, 2.998e10),
                entry(&["avogadro's number", "NA"], "", UnitSystem::None, 6.02214076e23),
                entry(&["alphabet"], "", UnitSystem::None, 26.0),
                entry(&["alpha"], "", UnitSystem::None, 7.297e-3),
            ],
        )
    }

    #[test]
    fn test_no_matches() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("zzz_not_a_constant", "any", 0);
        assert_eq!(result.status, FindStatus::NoMatches);
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_exact_beats_pattern() {
        // "alpha" is a full alias of one entry and a substring of another;
        // the exact pass wins and the substring entry is not consulted
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("alpha", "any", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].value, 7.297e-3);
    }

    #[test]
    fn test_pattern_fallback() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("alphab", "any", 0);
        assert_eq!(result.status, FindStatus::OnePatternMatchUnitOk);
        assert_eq!(result.entries[0].name(), "alphabet");
    }

    #[test]
    fn test_wildcard_query() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("alpha?et", "any", 0);
        assert_eq!(result.status, FindStatus::OnePatternMatchUnitOk);
        assert_eq!(result.entries[0].name(), "alphabet");

        let result = catalog.find("avo*number", "any", 0);
        assert_eq!(result.status, FindStatus::OnePatternMatchUnitOk);
        assert_eq!(result.entries[0].name(), "avogadro's number");
    }

    #[test]
    fn test_unit_system_selects_variant() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("c", "cgs", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].unit, "cm/s");
        assert_eq!(result.entries[0].value, 2.998e10);
    }

    #[test]
    fn test_empty_unit_returns_all_variants() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("c", "", 0);
        assert_eq!(result.status, FindStatus::MultiExactMatchNoUnit);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].value, 2.998e8);
        assert_eq!(result.entries[1].value, 2.998e10);
    }

    #[test]
    fn test_unit_mismatch_without_conversion() {
        // avogadro has no unit; asking for kg cannot convert
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("avogadro's number", "kg", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitMismatch);
        assert_eq!(result.entries[0].value, 6.02214076e23);
        assert_eq!(result.entries[0].unit, "");
    }

    #[test]
    fn test_direct_match_skips_converter() {
        // The doubling converter would corrupt the value if consulted
        let catalog = light_catalog(Box::new(DoublingConverter));
        let result = catalog.find("c", "m/s", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].value, 2.998e8);
    }

    #[test]
    fn test_single_match_conversion_fallback() {
        let catalog = ConstantCatalog::with_entries(
            Box::new(DimensionalConverter::new()),
            vec![entry(&["bohr radius"], "m", UnitSystem::Mks, 5.29177210903e-11)],
        );
        let result = catalog.find("bohr radius", "cm", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].unit, "cm");
        let expected = 5.29177210903e-9;
        assert!((result.entries[0].value - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_multi_match_conversion_dedups_by_group() {
        // Neither variant matches km/s literally; both convert, but only
        // the first of the group is kept
        let catalog = light_catalog(Box::new(DimensionalConverter::new()));
        let result = catalog.find("c", "km/s", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].unit, "km/s");
        let expected = 2.998e5;
        assert!((result.entries[0].value - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_multi_match_mismatch_dedups() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("c", "km/s", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitMismatch);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].unit, "m/s");
    }

    #[test]
    fn test_dedup_never_repeats_group() {
        let catalog = light_catalog(Box::new(NoConverter));
        let result = catalog.find("c", "any", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].unit, "m/s");
    }

    #[test]
    fn test_find_unique() {
        let catalog = light_catalog(Box::new(NoConverter));
        assert_eq!(catalog.find_unique("c", "cgs").unwrap(), 2.998e10);

        let err = catalog.find_unique("c", "").unwrap_err();
        assert_eq!(
            err,
            CatalogError::AmbiguousOrNotFound {
                name: "c".to_string(),
                unit: "".to_string(),
                status: FindStatus::MultiExactMatchNoUnit,
            }
        );
    }

    #[test]
    fn test_add_remove_round_trip() {
        let mut catalog = light_catalog(Box::new(NoConverter));
        let custom = entry(&["answer", "forty-two"], "", UnitSystem::None, 42.0);
        catalog.add(custom.clone()).unwrap();

        let result = catalog.find("answer", "any", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0], custom);

        catalog.remove("answer").unwrap();
        let result = catalog.find("answer", "any", 0);
        assert_eq!(result.status, FindStatus::NoMatches);
    }

    #[test]
    fn test_add_rejects_duplicates_and_empty_names() {
        let mut catalog = light_catalog(Box::new(NoConverter));
        let before = catalog.len();

        let dup = entry(&["not new", "c"], "", UnitSystem::None, 1.0);
        assert_eq!(
            catalog.add(dup).unwrap_err(),
            CatalogError::DuplicateName("c".to_string())
        );

        let nameless = entry(&[], "", UnitSystem::None, 1.0);
        assert_eq!(catalog.add(nameless).unwrap_err(), CatalogError::EmptyNames);

        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_remove_errors() {
        let mut catalog = light_catalog(Box::new(NoConverter));
        let before = catalog.len();

        assert_eq!(
            catalog.remove("nonexistent").unwrap_err(),
            CatalogError::NotFound("nonexistent".to_string())
        );

        // "c" names both unit variants; deleting is ambiguous
        assert_eq!(
            catalog.remove("c").unwrap_err(),
            CatalogError::AmbiguousDelete {
                name: "c".to_string(),
                count: 2,
            }
        );
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_unit_match_rule() {
        let mks = entry(&["x"], "m/s", UnitSystem::Mks, 1.0);
        let cgs = entry(&["x"], "cm/s", UnitSystem::Cgs, 1.0);
        let none = entry(&["x"], "", UnitSystem::None, 1.0);

        assert!(unit_match("any", &mks));
        assert!(unit_match("ANY", &cgs));

        assert!(unit_match("", &none));
        assert!(unit_match("none", &none));
        assert!(!unit_match("", &mks));

        assert!(unit_match("mks", &mks));
        assert!(unit_match("mks", &none));
        assert!(!unit_match("mks", &cgs));

        assert!(unit_match("cgs", &cgs));
        assert!(unit_match("cgs", &none));
        assert!(!unit_match("cgs", &mks));

        assert!(unit_match("M/S", &mks));
        assert!(!unit_match("km/s", &mks));
    }

    #[test]
    fn test_normalized_lookup() {
        let catalog = light_catalog(Box::new(NoConverter));
        // spacing and most punctuation squash away
        let result = catalog.find("  Speed.of.Light!  ", "mks", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].unit, "m/s");

        // '-' survives squashing, so the hyphenated form matches nothing
        let result = catalog.find("Speed-of-Light", "mks", 0);
        assert_eq!(result.status, FindStatus::NoMatches);
    }

    #[test]
    fn test_charge_signs_stay_distinct() {
        let catalog = ConstantCatalog::with_entries(
            Box::new(NoConverter),
            vec![
                entry(&["sigma+"], "MeV", UnitSystem::Other, 1189.37),
                entry(&["sigma-"], "MeV", UnitSystem::Other, 1197.449),
            ],
        );
        let result = catalog.find("sigma-", "any", 0);
        assert_eq!(result.status, FindStatus::OneExactMatchUnitOk);
        assert_eq!(result.entries[0].value, 1197.449);
    }
}
