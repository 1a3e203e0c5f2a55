/// Host-side cursor facilities the rig can request at bind time.

/// Cursor control offered by the host's windowing layer.
///
/// When `click_to_move_camera` is disabled, the rig asks the host to lock
/// and hide the pointer for the life of the process. The rig never
/// reverts the request; unlocking is the host's teardown concern.
pub trait CursorHost {
    /// Confine the pointer to the window and hide it.
    fn lock_and_hide(&mut self);
}

/// CursorHost that ignores the request. For headless hosts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCursor;

impl CursorHost for NoopCursor {
    fn lock_and_hide(&mut self) {}
}
