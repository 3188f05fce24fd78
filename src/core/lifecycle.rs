/// Mount state of one animator instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimatorState {
    /// Not mounted; no frames scheduled, no listeners registered.
    #[default]
    Idle,
    /// Frame loop armed and listeners attached.
    Running,
}

/// A registered input listener, kept so it can be detached on unmount.
#[derive(Debug)]
pub struct Listener<L> {
    pub event: &'static str,
    pub handle: L,
}

/// Idle/Running bookkeeping shared by every backdrop.
///
/// `L` is whatever the host needs to detach a listener later; the host
/// gets every handle back from [`Lifecycle::unmount`].
#[derive(Debug)]
pub struct Lifecycle<L> {
    state: AnimatorState,
    frames: u64,
    listeners: Vec<Listener<L>>,
}

impl<L> Default for Lifecycle<L> {
    fn default() -> Self {
        Self {
            state: AnimatorState::Idle,
            frames: 0,
            listeners: Vec::new(),
        }
    }
}

impl<L> Lifecycle<L> {
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Frames run since creation; stops advancing once unmounted.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn listeners(&self) -> &[Listener<L>] {
        &self.listeners
    }

    /// `Idle -> Running`. Returns `false` when already running.
    pub fn mount(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = AnimatorState::Running;
        true
    }

    /// Record a listener. Ignored (and handed back) while idle.
    pub fn attach(&mut self, event: &'static str, handle: L) -> Result<(), L> {
        if !self.is_running() {
            return Err(handle);
        }
        self.listeners.push(Listener { event, handle });
        Ok(())
    }

    /// Gate for the frame callback: counts the frame and says whether to
    /// run it and re-arm.
    pub fn begin_frame(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.frames += 1;
        true
    }

    /// `Running -> Idle`, handing back every listener for the host to detach.
    pub fn unmount(&mut self) -> Vec<Listener<L>> {
        self.state = AnimatorState::Idle;
        std::mem::take(&mut self.listeners)
    }
}
