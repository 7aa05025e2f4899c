use super::repositories::BenchmarkRepository;
use super::value_objects::SeriesKind;
use crate::domain::logging::LogComponent;

/// Maps display names of series to the field keys holding their data.
pub struct SeriesResolver<'a, R: BenchmarkRepository> {
    repository: &'a R,
}

impl<'a, R: BenchmarkRepository> SeriesResolver<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Field key for `series` in `group`, or `None` when the group, the
    /// series or that kind of field is not known. `None` means "leave the
    /// element out", never an error.
    pub fn resolve_key(&self, group: &str, series: &str, kind: SeriesKind) -> Option<&'a str> {
        let Some(dataset) = self.repository.dataset(group) else {
            crate::log_warn!(LogComponent::Domain("SeriesResolver"), "Invalid series group: {}", group);
            return None;
        };
        let Some(binding) = dataset.binding(series) else {
            crate::log_warn!(
                LogComponent::Domain("SeriesResolver"),
                "Invalid series name: {} (group {})",
                series,
                group
            );
            return None;
        };
        binding.key(kind)
    }

    /// Keys of every resolvable series, in the order given.
    pub fn keys<S: AsRef<str>>(&self, group: &str, series: &[S], kind: SeriesKind) -> Vec<String> {
        series
            .iter()
            .filter_map(|name| self.resolve_key(group, name.as_ref(), kind))
            .map(str::to_string)
            .collect()
    }
}
