use tokio::sync::broadcast;

/// Zero-payload "something changed" channel. Mutation handlers signal it
/// after every successful write; the only valid reaction to a signal is a
/// full reload of the rating list. No sequence numbers, so a slow reload
/// finishing after a newer one can overwrite fresher cache state — the
/// same latent race the original client carried.
#[derive(Clone)]
pub struct ChangeNotifier {
	tx: broadcast::Sender<()>,
}

impl ChangeNotifier {
	pub fn new(capacity: usize) -> Self {
		let (tx, _) = broadcast::channel(capacity);
		Self { tx }
	}

	/// Lossy by design: with no subscriber the signal is dropped.
	pub fn notify(&self) {
		let _ = self.tx.send(());
	}

	pub fn subscribe(&self) -> broadcast::Receiver<()> {
		self.tx.subscribe()
	}
}
