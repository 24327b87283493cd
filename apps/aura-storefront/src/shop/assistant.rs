use super::*;

impl AssistantPanel {
    pub(super) fn new() -> Self {
        Self {
            open: false,
            input: String::new(),
            transcript: vec![ChatTurn::assistant(ASSISTANT_GREETING)],
            next_request_id: 1,
            inflight_request_id: None,
            reply_receiver: None,
        }
    }

    pub(super) fn is_pending(&self) -> bool {
        self.inflight_request_id.is_some()
    }
}

impl StorefrontApp {
    /// Submits the drafted message to the concierge on a worker thread.
    /// A second submission while one is in flight is ignored.
    pub(super) fn send_chat_message(&mut self) {
        if self.assistant.is_pending() {
            return;
        }

        let message = self.assistant.input.trim().to_owned();
        if message.is_empty() {
            return;
        }
        self.assistant.input.clear();

        // The transcript sent to the concierge is the conversation so
        // far; the new message rides separately.
        let transcript = self.assistant.transcript.clone();
        self.assistant.transcript.push(ChatTurn::user(message.clone()));

        let request_id = self.assistant.next_request_id;
        self.assistant.next_request_id = self.assistant.next_request_id.saturating_add(1);
        self.assistant.inflight_request_id = Some(request_id);

        let catalog = self.nav.catalog().clone();
        let (tx, rx) = mpsc::channel();
        self.assistant.reply_receiver = Some(rx);

        let chat_job = move || {
            let text = match GeminiTransport::new() {
                Ok(transport) => {
                    Concierge::new(catalog, transport).send_message(&transcript, &message)
                }
                Err(error) => {
                    log::warn!("concierge transport unavailable: {error}");
                    UNREACHABLE_APOLOGY.to_owned()
                }
            };
            let _ = tx.send(AssistantReply { request_id, text });
        };

        if thread::Builder::new()
            .name("aura-concierge".to_owned())
            .stack_size(ASSISTANT_THREAD_STACK_SIZE)
            .spawn(chat_job)
            .is_err()
        {
            self.assistant.inflight_request_id = None;
            self.assistant.reply_receiver = None;
            self.assistant
                .transcript
                .push(ChatTurn::assistant(UNREACHABLE_APOLOGY));
        }
    }

    pub(super) fn poll_assistant(&mut self) {
        loop {
            let reply = self
                .assistant
                .reply_receiver
                .as_ref()
                .and_then(|receiver| receiver.try_recv().ok());

            let Some(reply) = reply else {
                break;
            };

            if Some(reply.request_id) != self.assistant.inflight_request_id {
                continue;
            }

            self.assistant.inflight_request_id = None;
            self.assistant.reply_receiver = None;
            self.assistant.transcript.push(ChatTurn::assistant(reply.text));
        }
    }
}
