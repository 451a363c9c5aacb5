/// Tags requests so only the most recently issued one may commit its result.
#[derive(Debug, Default)]
pub(crate) struct RequestGate {
    latest: u64,
}

impl RequestGate {
    /// Issues a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Invalidates outstanding tickets without starting a request.
    pub fn supersede(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}
