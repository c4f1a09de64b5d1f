//! The 3-step lead capture flow.

/// Client details collected across the lead capture turns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Full name, from the first reply.
    pub name: String,
    /// Email address, when the second reply looks like one.
    ///
    /// Exactly one of `email` and `phone` is set.
    pub email: Option<String>,
    /// Phone number, when the second reply does not look like an email.
    pub phone: Option<String>,
    /// Company name, from the third reply.
    pub company: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LeadStage {
    AwaitName,
    AwaitContact,
    AwaitCompany,
}

/// What the flow expects after recording a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LeadStep {
    /// The name was stored; ask for a contact method next.
    NeedContact,
    /// The contact was stored; ask for the company next.
    NeedCompany,
    /// All three replies are in; finalize immediately.
    Complete(ClientInfo),
}

/// The strictly ordered name → contact → company collection machine.
///
/// There is no skipping and no backward transition; cancelling the
/// whole flow is the only way out before completion.
#[derive(Clone, Debug)]
pub(crate) struct LeadFlow {
    stage: LeadStage,
    info: ClientInfo,
}

impl LeadFlow {
    pub(crate) fn new() -> Self {
        Self {
            stage: LeadStage::AwaitName,
            info: ClientInfo::default(),
        }
    }

    /// Records one free-text reply and advances the stage.
    pub(crate) fn record(&mut self, reply: &str) -> LeadStep {
        let reply = reply.trim();
        match self.stage {
            LeadStage::AwaitName => {
                self.info.name = reply.to_owned();
                self.stage = LeadStage::AwaitContact;
                LeadStep::NeedContact
            }
            LeadStage::AwaitContact => {
                // Whatever the reply looks like decides the channel:
                // an `@` makes it an email, anything else is a phone.
                if reply.contains('@') {
                    self.info.email = Some(reply.to_owned());
                } else {
                    self.info.phone = Some(reply.to_owned());
                }
                self.stage = LeadStage::AwaitCompany;
                LeadStep::NeedCompany
            }
            LeadStage::AwaitCompany => {
                self.info.company = reply.to_owned();
                LeadStep::Complete(self.info.clone())
            }
        }
    }

    /// The collected name, for mid-flow prompts.
    pub(crate) fn name(&self) -> &str {
        &self.info.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_reply() {
        let mut flow = LeadFlow::new();
        assert_eq!(flow.record("Marie Kabongo"), LeadStep::NeedContact);
        assert_eq!(
            flow.record("marie@techstart.cd"),
            LeadStep::NeedCompany
        );
        let LeadStep::Complete(info) = flow.record("TechStart RDC") else {
            panic!("flow should be complete");
        };
        assert_eq!(info.name, "Marie Kabongo");
        assert_eq!(info.email.as_deref(), Some("marie@techstart.cd"));
        assert_eq!(info.phone, None);
        assert_eq!(info.company, "TechStart RDC");
    }

    #[test]
    fn test_phone_reply() {
        let mut flow = LeadFlow::new();
        flow.record("Patrick Mukendi");
        flow.record("+243 900 000 000");
        let LeadStep::Complete(info) = flow.record("FinanceHub Africa")
        else {
            panic!("flow should be complete");
        };
        assert_eq!(info.email, None);
        assert_eq!(info.phone.as_deref(), Some("+243 900 000 000"));
    }

    #[test]
    fn test_replies_are_trimmed() {
        let mut flow = LeadFlow::new();
        flow.record("  Sophie Ilunga  ");
        assert_eq!(flow.name(), "Sophie Ilunga");
    }
}
