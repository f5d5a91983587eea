/// The `event` parameter of an announce.
///
/// `None` is a regular interval update; unrecognised values are treated the same.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum AnnounceEvent {
    #[default]
    None,
    Started,
    Stopped,
    Completed
}
