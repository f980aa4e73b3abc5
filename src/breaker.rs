//! Crib search: exhaustive trial decryption over a space of candidate
//! configurations.
//!
//! Each candidate gets its own [`Engine`], so candidates are independent and
//! are split across scoped worker threads. The only state shared between
//! workers is the wiring catalog and the read-only search inputs.

use std::collections::BTreeSet;
use std::fmt;
use std::thread;

use log::{debug, info, warn};

use crate::config::EngineConfiguration;
use crate::engine::Engine;
use crate::error::{CharacterError, ConfigurationError, PlugboardError};
use crate::plugboard::{PlugLead, Plugboard};
use crate::utils::alphabet::{self, ALPHABET_SIZE};
use crate::utils::pairs::{normalized, pairs_to_wiring, wiring_pairs, WirePair};
use crate::wiring::Variant;

/// Placeholder for an unknown plug letter in a partial plugboard.
pub const UNKNOWN_PLUG: char = '?';

/// Candidate values for each part of a configuration.
///
/// [`candidates`](Self::candidates) yields the cartesian product, rotor
/// orders varying slowest and plugboards fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpace {
    pub rotor_orders: Vec<Vec<Variant>>,
    pub reflectors: Vec<Variant>,
    pub ring_settings: Vec<Vec<u8>>,
    pub positions: Vec<Vec<char>>,
    pub plugboards: Vec<Plugboard>,
}

impl SearchSpace {
    /// A space holding exactly one candidate: `configuration`.
    pub fn from_configuration(configuration: &EngineConfiguration) -> Self {
        SearchSpace {
            rotor_orders: vec![configuration.rotors.clone()],
            reflectors: vec![configuration.reflector],
            ring_settings: vec![configuration.ring_settings.clone()],
            positions: vec![configuration.positions.clone()],
            plugboards: vec![configuration.plugboard.clone()],
        }
    }

    pub fn with_rotor_orders(mut self, rotor_orders: Vec<Vec<Variant>>) -> Self {
        self.rotor_orders = rotor_orders;
        self
    }

    pub fn with_reflectors(mut self, reflectors: Vec<Variant>) -> Self {
        self.reflectors = reflectors;
        self
    }

    pub fn with_ring_settings(mut self, ring_settings: Vec<Vec<u8>>) -> Self {
        self.ring_settings = ring_settings;
        self
    }

    pub fn with_positions(mut self, positions: Vec<Vec<char>>) -> Self {
        self.positions = positions;
        self
    }

    pub fn with_plugboards(mut self, plugboards: Vec<Plugboard>) -> Self {
        self.plugboards = plugboards;
        self
    }

    /// Number of candidates in the space.
    pub fn len(&self) -> usize {
        self.rotor_orders.len()
            * self.reflectors.len()
            * self.ring_settings.len()
            * self.positions.len()
            * self.plugboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every combination of the candidate lists.
    ///
    /// Candidates are not validated here; invalid ones are rejected when
    /// their engine is built.
    pub fn candidates(&self) -> impl Iterator<Item = EngineConfiguration> + '_ {
        self.rotor_orders.iter().flat_map(move |rotors| {
            self.reflectors.iter().flat_map(move |&reflector| {
                self.ring_settings.iter().flat_map(move |rings| {
                    self.positions.iter().flat_map(move |positions| {
                        self.plugboards.iter().map(move |plugboard| EngineConfiguration {
                            rotors: rotors.clone(),
                            reflector,
                            ring_settings: rings.clone(),
                            positions: positions.clone(),
                            plugboard: plugboard.clone(),
                        })
                    })
                })
            })
        })
    }
}

/// A candidate whose decryption contains a crib.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CribMatch {
    pub configuration: EngineConfiguration,
    /// Set when the candidate used a substituted reflector wiring.
    pub reflector_wiring: Option<[u8; ALPHABET_SIZE]>,
    pub plaintext: String,
    /// The crib found in the plaintext.
    pub crib: String,
}

impl fmt::Display for CribMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.configuration)?;
        if let Some(table) = &self.reflector_wiring {
            write!(f, " [reflector {}]", alphabet::render_table(table))?;
        }
        write!(f, ": {}", self.plaintext)
    }
}

/// Exhaustive crib search over candidate configurations.
///
/// # Examples
///
/// ```
/// use rotorcrypt::breaker::{CribSearch, SearchSpace};
/// use rotorcrypt::config::EngineConfiguration;
/// use rotorcrypt::wiring::Variant;
///
/// let config: EngineConfiguration = "BETA-GAMMA-V A 04-02-14 M-J-M KI-XN-FL".parse().unwrap();
/// let space = SearchSpace::from_configuration(&config)
///     .with_reflectors(vec![Variant::A, Variant::B, Variant::C]);
///
/// let search = CribSearch::new("DMEXBMKYCVPNQBEDHXVPZGKMTFFBJRPJTLHLCHOTKOYXGGHZ", ["SECRETS"]).unwrap();
/// let hits = search.run(&space);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].configuration.reflector, Variant::C);
/// ```
#[derive(Debug, Clone)]
pub struct CribSearch {
    ciphertext: String,
    cribs: Vec<String>,
    workers: usize,
}

impl CribSearch {
    /// Prepares a search of `ciphertext` for any of `cribs`.
    ///
    /// Both are upper-cased. The worker count defaults to the available
    /// parallelism.
    ///
    /// # Errors
    /// Returns [`CharacterError::NotALetter`] if the ciphertext holds
    /// anything but letters and spaces, or a crib anything but letters.
    pub fn new<I, S>(ciphertext: &str, cribs: I) -> Result<Self, CharacterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(bad) = ciphertext
            .chars()
            .find(|&c| c != ' ' && alphabet::index_of(c).is_none())
        {
            return Err(CharacterError::NotALetter(bad));
        }
        let cribs = cribs
            .into_iter()
            .map(|c| c.as_ref().to_ascii_uppercase())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>();
        if let Some(bad) = cribs
            .iter()
            .flat_map(|c| c.chars())
            .find(|&c| alphabet::index_of(c).is_none())
        {
            return Err(CharacterError::NotALetter(bad));
        }
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Ok(CribSearch {
            ciphertext: ciphertext.to_ascii_uppercase(),
            cribs,
            workers,
        })
    }

    /// Sets the number of worker threads (at least one).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Tries every candidate of `space`.
    ///
    /// # Returns
    /// The matching candidates, in candidate order.
    pub fn run(&self, space: &SearchSpace) -> Vec<CribMatch> {
        let candidates: Vec<EngineConfiguration> = space.candidates().collect();
        info!(
            "searching {} candidates for {:?} on {} workers",
            candidates.len(),
            self.cribs,
            self.workers
        );

        let hits = self.parallel(&candidates, |configuration| {
            let mut engine = match Engine::new(configuration) {
                Ok(engine) => engine,
                Err(err) => {
                    warn!("skipping candidate {:?}: {}", configuration, err);
                    return None;
                }
            };
            self.try_engine(&mut engine, configuration, None)
        });

        info!("{} of {} candidates matched", hits.len(), candidates.len());
        hits
    }

    /// Tries `configuration` once per substituted reflector wiring.
    ///
    /// # Returns
    /// The matching wirings, in the order given.
    ///
    /// # Errors
    /// Returns the [`ConfigurationError`] if `configuration` is invalid.
    pub fn run_with_reflectors(
        &self,
        configuration: &EngineConfiguration,
        reflector_tables: &[[u8; ALPHABET_SIZE]],
    ) -> Result<Vec<CribMatch>, ConfigurationError> {
        let base = Engine::new(configuration)?;
        info!(
            "searching {} reflector wirings for {:?} on {} workers",
            reflector_tables.len(),
            self.cribs,
            self.workers
        );

        let hits = self.parallel(reflector_tables, |&table| {
            let mut engine = base.clone();
            engine.set_reflector_wiring(table).ok()?;
            self.try_engine(&mut engine, configuration, Some(table))
        });

        info!("{} of {} wirings matched", hits.len(), reflector_tables.len());
        Ok(hits)
    }

    /// Decrypts with `engine` and reports a match if a crib appears.
    fn try_engine(
        &self,
        engine: &mut Engine,
        configuration: &EngineConfiguration,
        reflector_wiring: Option<[u8; ALPHABET_SIZE]>,
    ) -> Option<CribMatch> {
        let plaintext = engine.encode_message(&self.ciphertext, false).ok()?;
        let crib = self
            .cribs
            .iter()
            .find(|crib| plaintext.contains(crib.as_str()))?
            .clone();
        debug!("crib {} found with {}", crib, configuration);
        Some(CribMatch {
            configuration: configuration.clone(),
            reflector_wiring,
            plaintext,
            crib,
        })
    }

    /// Runs `check` over `items` on the worker threads, keeping input order.
    fn parallel<T, F>(&self, items: &[T], check: F) -> Vec<CribMatch>
    where
        T: Sync,
        F: Fn(&T) -> Option<CribMatch> + Sync,
    {
        if items.is_empty() {
            return Vec::new();
        }
        let chunk_size = items.len().div_ceil(self.workers);
        let check = &check;
        thread::scope(|scope| {
            let handles: Vec<_> = items
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || chunk.iter().filter_map(check).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    }
}

/// Every `n`-letter start position, `A-A-…-A` first, leftmost letter varying
/// slowest.
pub fn all_positions(n: usize) -> Vec<Vec<char>> {
    let mut out: Vec<Vec<char>> = vec![Vec::with_capacity(n)];
    for _ in 0..n {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                alphabet::ALPHABET.chars().map(move |c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect();
    }
    out
}

/// Expands a plugboard with unknown letters into every complete plugboard.
///
/// Unknown letters are written `?`, e.g. `"WP-RJ-A?-VF-I?-HN"`. Each `?` is
/// filled with a letter used nowhere else on the board.
///
/// # Errors
/// Returns [`PlugboardError::InvalidLead`] for a token that is not two
/// letters or placeholders, and any error from building the boards.
///
/// # Examples
///
/// ```
/// use rotorcrypt::breaker::complete_plugboards;
///
/// let boards = complete_plugboards("AB-C?").unwrap();
/// assert_eq!(boards.len(), 23);
/// assert_eq!(boards[0].to_string(), "AB-CD");
/// ```
pub fn complete_plugboards(partial: &str) -> Result<Vec<Plugboard>, PlugboardError> {
    let tokens: Vec<Vec<char>> = partial
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            let chars: Vec<char> = t.chars().map(|c| c.to_ascii_uppercase()).collect();
            let valid = chars.len() == 2
                && chars
                    .iter()
                    .all(|&c| c == UNKNOWN_PLUG || alphabet::index_of(c).is_some());
            if valid {
                Ok(chars)
            } else {
                Err(PlugboardError::InvalidLead(t.to_string()))
            }
        })
        .collect::<Result<_, _>>()?;

    let mut used = [false; ALPHABET_SIZE];
    for &c in tokens.iter().flatten() {
        if let Some(p) = alphabet::index_of(c) {
            used[p as usize] = true;
        }
    }

    let mut slots: Vec<char> = tokens.into_iter().flatten().collect();
    let unknown: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == UNKNOWN_PLUG)
        .map(|(i, _)| i)
        .collect();
    let mut boards = Vec::new();
    fill_unknown(&mut slots, &unknown, 0, &mut used, &mut boards)?;
    debug!("{} completes to {} plugboards", partial, boards.len());
    Ok(boards)
}

/// Fills the placeholder slots `unknown[next..]`, one board per complete
/// assignment.
fn fill_unknown(
    slots: &mut [char],
    unknown: &[usize],
    next: usize,
    used: &mut [bool; ALPHABET_SIZE],
    boards: &mut Vec<Plugboard>,
) -> Result<(), PlugboardError> {
    let Some(&index) = unknown.get(next) else {
        let leads = slots
            .chunks(2)
            .map(|pair| PlugLead::new(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        boards.push(Plugboard::from_leads(leads)?);
        return Ok(());
    };

    // A lead with both ends unknown is filled in ascending order only.
    let floor = match index.checked_sub(1) {
        Some(partner) if index % 2 == 1 && unknown.contains(&partner) => {
            alphabet::index_of(slots[partner]).map_or(0, |p| p + 1)
        }
        _ => 0,
    };

    for p in floor..ALPHABET_SIZE as u8 {
        if used[p as usize] {
            continue;
        }
        used[p as usize] = true;
        slots[index] = alphabet::letter_at(p);
        fill_unknown(slots, unknown, next + 1, used, boards)?;
        used[p as usize] = false;
    }
    slots[index] = UNKNOWN_PLUG;
    Ok(())
}

/// Every reflector reachable from `table` by swapping wire endpoints.
///
/// A swap picks two wires `(a, b)` and `(c, d)` and reconnects them as
/// `(a, c), (b, d)` or `(a, d), (b, c)`. `swaps` distinct pairs of wires are
/// swapped, each wire at most once. Results are deduplicated and sorted.
///
/// # Examples
///
/// ```
/// use rotorcrypt::breaker::rewired_reflectors;
/// use rotorcrypt::wiring::{wiring_for, Variant};
///
/// let tables = rewired_reflectors(&wiring_for(Variant::B).forward, 2);
/// assert_eq!(tables.len(), 8580);
/// ```
pub fn rewired_reflectors(table: &[u8; ALPHABET_SIZE], swaps: usize) -> Vec<[u8; ALPHABET_SIZE]> {
    let wires = wiring_pairs(table);
    let mut out = BTreeSet::new();
    if swaps * 2 <= wires.len() {
        let mut chosen = Vec::with_capacity(swaps * 2);
        let mut kept = Vec::with_capacity(wires.len());
        select_wires(&wires, swaps * 2, &mut chosen, &mut kept, &mut out);
    }
    out.into_iter().collect()
}

/// Enumerates every way to pick `need` of `wires`, then rewires the picks.
fn select_wires(
    wires: &[WirePair],
    need: usize,
    chosen: &mut Vec<WirePair>,
    kept: &mut Vec<WirePair>,
    out: &mut BTreeSet<[u8; ALPHABET_SIZE]>,
) {
    if need == 0 {
        let mut built = kept.clone();
        built.extend_from_slice(wires);
        cross_wires(chosen, &mut built, out);
        return;
    }
    let Some((&first, rest)) = wires.split_first() else {
        return;
    };
    if rest.len() + 1 < need {
        return;
    }

    chosen.push(first);
    select_wires(rest, need - 1, chosen, kept, out);
    chosen.pop();

    kept.push(first);
    select_wires(rest, need, chosen, kept, out);
    kept.pop();
}

/// Pairs up `pending` wires in every possible way and swaps each pair.
fn cross_wires(
    pending: &[WirePair],
    built: &mut Vec<WirePair>,
    out: &mut BTreeSet<[u8; ALPHABET_SIZE]>,
) {
    let Some((&(a, b), rest)) = pending.split_first() else {
        out.insert(pairs_to_wiring(built));
        return;
    };
    for (j, &(c, d)) in rest.iter().enumerate() {
        let others: Vec<WirePair> = rest
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != j)
            .map(|(_, &w)| w)
            .collect();
        for crossing in [[(a, c), (b, d)], [(a, d), (b, c)]] {
            built.push(normalized(crossing[0].0, crossing[0].1));
            built.push(normalized(crossing[1].0, crossing[1].1));
            cross_wires(&others, built, out);
            built.pop();
            built.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alphabet::{is_reflection, render_table};
    use crate::wiring::wiring_for;

    #[test]
    fn test_all_positions() {
        let positions = all_positions(2);
        assert_eq!(positions.len(), 676);
        assert_eq!(positions[0], vec!['A', 'A']);
        assert_eq!(positions[1], vec!['A', 'B']);
        assert_eq!(positions[26], vec!['B', 'A']);
        assert_eq!(positions[675], vec!['Z', 'Z']);
        assert_eq!(all_positions(0), vec![Vec::<char>::new()]);
    }

    #[test]
    fn test_complete_plugboards_single_unknown() {
        let boards = complete_plugboards("AB-C?").unwrap();
        assert_eq!(boards.len(), 23);
        assert!(boards.iter().all(|b| b.len() == 2));
        assert_eq!(boards[22].to_string(), "AB-CZ");
    }

    #[test]
    fn test_complete_plugboards_two_unknowns() {
        let boards = complete_plugboards("WP-RJ-A?-VF-I?-HN-CG-BS").unwrap();
        assert_eq!(boards.len(), 12 * 11);
        assert_eq!(boards[0].to_string(), "WP-RJ-AD-VF-IE-HN-CG-BS");
    }

    #[test]
    fn test_complete_plugboards_unknown_lead() {
        // Both ends unknown: each unordered lead appears once.
        let boards = complete_plugboards("??").unwrap();
        assert_eq!(boards.len(), 26 * 25 / 2);
    }

    #[test]
    fn test_complete_plugboards_without_unknowns() {
        let boards = complete_plugboards("AB-CD").unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].to_string(), "AB-CD");
    }

    #[test]
    fn test_complete_plugboards_rejects_bad_token() {
        assert_eq!(
            complete_plugboards("AB-C?D"),
            Err(PlugboardError::InvalidLead("C?D".to_string()))
        );
        assert!(complete_plugboards("A1").is_err());
    }

    #[test]
    fn test_rewired_reflectors_one_swap() {
        let tables = rewired_reflectors(&wiring_for(Variant::B).forward, 1);
        assert_eq!(tables.len(), 13 * 12 / 2 * 2);
        assert!(tables.iter().all(is_reflection));
        assert!(!tables.contains(&wiring_for(Variant::B).forward));
    }

    #[test]
    fn test_rewired_reflectors_sorted_and_unique() {
        let tables = rewired_reflectors(&wiring_for(Variant::C).forward, 2);
        assert_eq!(tables.len(), 8580);
        assert!(tables.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rewired_reflectors_too_many_swaps() {
        assert!(rewired_reflectors(&wiring_for(Variant::A).forward, 7).is_empty());
        assert_eq!(
            rewired_reflectors(&wiring_for(Variant::A).forward, 0),
            vec![wiring_for(Variant::A).forward]
        );
    }

    #[test]
    fn test_rewire_swaps_endpoints() {
        // A-Y and B-R swapped into A-B/R-Y or A-R/B-Y.
        let tables = rewired_reflectors(&wiring_for(Variant::B).forward, 1);
        let names: Vec<String> = tables.iter().map(render_table).collect();
        let mut expected = wiring_for(Variant::B).forward;
        expected[0] = 1;
        expected[1] = 0;
        expected[17] = 24;
        expected[24] = 17;
        assert!(names.contains(&render_table(&expected)));
    }

    #[test]
    fn test_space_len_and_order() {
        let config: EngineConfiguration = "I-II-III B 1-1-1 A-A-A".parse().unwrap();
        let space = SearchSpace::from_configuration(&config)
            .with_reflectors(vec![Variant::A, Variant::B])
            .with_positions(all_positions(1).into_iter().map(|p| vec!['A', 'A', p[0]]).collect());
        assert_eq!(space.len(), 52);
        let candidates: Vec<_> = space.candidates().collect();
        assert_eq!(candidates.len(), 52);
        assert_eq!(candidates[0].reflector, Variant::A);
        assert_eq!(candidates[1].positions, vec!['A', 'A', 'B']);
        assert_eq!(candidates[26].reflector, Variant::B);
    }

    #[test]
    fn test_rotor_orders_vary_slowest() {
        let config: EngineConfiguration = "I-II-III B 1-1-1 A-A-A".parse().unwrap();
        let space = SearchSpace::from_configuration(&config)
            .with_rotor_orders(vec![
                vec![Variant::I, Variant::II, Variant::III],
                vec![Variant::III, Variant::II, Variant::I],
            ])
            .with_ring_settings(vec![vec![1, 1, 1], vec![2, 4, 6]])
            .with_positions(vec![vec!['A', 'A', 'A'], vec!['A', 'A', 'B']]);
        assert_eq!(space.len(), 8);
        let candidates: Vec<_> = space.candidates().collect();
        assert_eq!(candidates.len(), 8);

        // Positions cycle fastest, then rings, then rotor orders.
        let first = &candidates[0];
        assert_eq!(candidates[1].positions, vec!['A', 'A', 'B']);
        assert_eq!(candidates[1].ring_settings, first.ring_settings);

        let next_rings = &candidates[2];
        assert_eq!(next_rings.ring_settings, vec![2, 4, 6]);
        assert_eq!(next_rings.rotors, first.rotors);
        assert_eq!(next_rings.positions, first.positions);

        let next_order = &candidates[4];
        assert_eq!(next_order.rotors, vec![Variant::III, Variant::II, Variant::I]);
        assert_eq!(next_order.ring_settings, first.ring_settings);
        assert_eq!(next_order.positions, first.positions);
        assert_eq!(next_order.reflector, first.reflector);
        assert_eq!(next_order.plugboard, first.plugboard);
    }

    #[test]
    fn test_search_skips_invalid_candidates() {
        let config: EngineConfiguration = "I-II-III B 1-1-1 A-A-Z".parse().unwrap();
        let space = SearchSpace::from_configuration(&config).with_reflectors(vec![Variant::I, Variant::B]);
        let search = CribSearch::new("U", ["A"]).unwrap().with_workers(2);
        let hits = search.run(&space);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].plaintext, "A");
        assert_eq!(hits[0].crib, "A");
    }

    #[test]
    fn test_search_rejects_bad_ciphertext() {
        assert_eq!(
            CribSearch::new("AB1", ["A"]).unwrap_err(),
            CharacterError::NotALetter('1')
        );
    }

    #[test]
    fn test_search_rejects_bad_crib() {
        assert_eq!(
            CribSearch::new("ABC", ["SECRET!"]).unwrap_err(),
            CharacterError::NotALetter('!')
        );
        assert!(CribSearch::new("ABC", ["TWO WORDS"]).is_err());
        assert!(CribSearch::new("ABC", ["secret"]).is_ok());
    }

    #[test]
    fn test_worker_count() {
        let search = CribSearch::new("ABC", ["A"]).unwrap();
        assert!(search.workers() >= 1);
        assert_eq!(search.clone().with_workers(3).workers(), 3);
        assert_eq!(search.with_workers(0).workers(), 1);
    }

    #[test]
    fn test_results_keep_candidate_order() {
        let config: EngineConfiguration = "I-II-III B 1-1-1 A-A-A".parse().unwrap();
        let space = SearchSpace::from_configuration(&config).with_positions(all_positions(3));
        // About one start position in 25 turns A into E.
        let one = CribSearch::new("A", ["E"]).unwrap().with_workers(1).run(&space);
        let many = CribSearch::new("A", ["E"]).unwrap().with_workers(7).run(&space);
        assert!(!one.is_empty());
        assert_eq!(one, many);
    }

    #[test]
    fn test_crib_match_display() {
        let config: EngineConfiguration = "I-II-III B 1-1-1 A-A-Z".parse().unwrap();
        let hit = CribMatch {
            configuration: config,
            reflector_wiring: None,
            plaintext: "HELLO".to_string(),
            crib: "HELLO".to_string(),
        };
        assert_eq!(hit.to_string(), "I-II-III B 01-01-01 A-A-Z: HELLO");
    }
}
