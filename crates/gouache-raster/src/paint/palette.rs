/// Color table for an indexed surface.
///
/// Lookup is pure: resolving a color through the palette never mutates it,
/// so ink resolution stays a function of its inputs. A color with no exact
/// entry maps to the nearest one by squared channel distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<[u8; 3]>,
}

impl Palette {
    /// A palette from explicit RGB entries. At most 256 are addressable;
    /// extra entries are unreachable from an 8-bit index and dropped.
    pub fn new(entries: impl Into<Vec<[u8; 3]>>) -> Self {
        let mut entries = entries.into();
        entries.truncate(256);
        Self { entries }
    }

    /// 256-entry grayscale ramp.
    pub fn grayscale() -> Self {
        Self {
            entries: (0..=255u8).map(|v| [v, v, v]).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entry(&self, index: u8) -> Option<[u8; 3]> {
        self.entries.get(index as usize).copied()
    }

    /// Index of the entry closest to `(r, g, b)`; `None` only for an empty
    /// palette. Inexact matches are reported at debug level.
    pub fn find(&self, r: u8, g: u8, b: u8) -> Option<u8> {
        let mut best: Option<(u32, usize)> = None;
        for (i, e) in self.entries.iter().enumerate() {
            let d = |a: u8, b: u8| {
                let d = a as i32 - b as i32;
                (d * d) as u32
            };
            let dist = d(e[0], r) + d(e[1], g) + d(e[2], b);
            if dist == 0 {
                return Some(i as u8);
            }
            if best.map_or(true, |(bd, _)| dist < bd) {
                best = Some((dist, i));
            }
        }
        best.map(|(dist, i)| {
            log::debug!(
                "palette: no exact entry for ({r}, {g}, {b}); nearest is index {i} at distance {dist}"
            );
            i as u8
        })
    }
}
