use core::ops::Range;

use crate::strip::StripId;

/// Maximum number of LEDs of one logical strip (all of its segments)
pub const MAX_STRIP_LEDS: usize = 96;

/// Physical LED layout of a sculpture
///
/// Every logical strip is driven by one or more physical segments. Segments
/// are numbered as outputs in order: all segments of the first strip, then all
/// segments of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SculptureTopology {
    strips: [&'static [usize]; StripId::COUNT],
}

impl SculptureTopology {
    /// Top ring split into three segments, one long strip below
    pub const CO2: Self = Self::new([&[25, 25, 25], &[55]]);
    pub const PM25: Self = Self::new([&[55], &[55]]);
    pub const VOC: Self = Self::new([&[50], &[50]]);

    pub const fn new(strips: [&'static [usize]; StripId::COUNT]) -> Self {
        Self { strips }
    }

    /// Segment lengths of a strip
    pub const fn segments(&self, strip: StripId) -> &'static [usize] {
        self.strips[strip.index()]
    }

    /// Total number of LEDs of a strip
    pub const fn strip_len(&self, strip: StripId) -> usize {
        let segments = self.segments(strip);
        let mut total = 0;
        let mut i = 0;
        while i < segments.len() {
            total += segments[i];
            i += 1;
        }
        if total > MAX_STRIP_LEDS {
            return MAX_STRIP_LEDS;
        }
        total
    }

    /// Number of physical outputs
    pub const fn output_count(&self) -> usize {
        self.strips[0].len() + self.strips[1].len()
    }

    /// Iterate over all physical outputs in output order
    pub fn outputs(&self) -> impl Iterator<Item = Segment> + '_ {
        StripId::ALL.into_iter().flat_map(move |strip| {
            let first_output = if strip == StripId::First {
                0
            } else {
                self.strips[0].len()
            };
            let mut start = 0;
            self.segments(strip)
                .iter()
                .enumerate()
                .map(move |(i, &len)| {
                    let end = (start + len).min(MAX_STRIP_LEDS);
                    let range = start.min(end)..end;
                    start = end;
                    Segment {
                        output: first_output + i,
                        strip,
                        range,
                    }
                })
        })
    }
}

/// One physical output and the pixels of its strip it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub output: usize,
    pub strip: StripId,
    pub range: Range<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn co2_top_ring_spans_three_outputs() {
        let topology = SculptureTopology::CO2;
        assert_eq!(topology.strip_len(StripId::First), 75);
        assert_eq!(topology.output_count(), 4);

        let mut outputs = topology.outputs();
        assert_eq!(
            outputs.next(),
            Some(Segment {
                output: 0,
                strip: StripId::First,
                range: 0..25
            })
        );
        assert_eq!(outputs.nth(1).map(|s| s.range), Some(50..75));
        assert_eq!(
            outputs.next(),
            Some(Segment {
                output: 3,
                strip: StripId::Second,
                range: 0..55
            })
        );
        assert_eq!(outputs.next(), None);
    }
}
