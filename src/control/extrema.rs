//! Running minimum / maximum of the filtered temperature.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtremaState {
    pub min_c: i32,
    pub max_c: i32,
    /// Displayed state is stale. Sticky until [`clear_changed`](Self::clear_changed).
    pub changed: bool,
}

impl ExtremaState {
    /// Track one filtered value.
    ///
    /// `average_changed` comes from the filter's caller: the tracker cannot
    /// see an average move that stays inside the current `[min, max]` band.
    pub fn update(self, filtered_c: i32, is_first_sample: bool, average_changed: bool) -> Self {
        if is_first_sample {
            return Self {
                min_c: filtered_c,
                max_c: filtered_c,
                changed: true,
            };
        }

        let min_c = self.min_c.min(filtered_c);
        let max_c = self.max_c.max(filtered_c);
        Self {
            min_c,
            max_c,
            changed: self.changed || min_c != self.min_c || max_c != self.max_c || average_changed,
        }
    }

    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}
