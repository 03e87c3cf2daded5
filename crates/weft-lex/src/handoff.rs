//! Synchronous item handoff between the scanning thread and the consumer.
//!
//! The handoff is a zero-capacity rendezvous channel: every send blocks the
//! scanner until the consumer receives that item, so the scanner can never
//! run ahead of a slow consumer and the consumer's next read is the signal
//! for the scanner to proceed.
//!
//! A second channel carries cancellation. The consumer side never sends on
//! it; dropping the consumer's end disconnects it, which [`ItemSender::send`]
//! observes via `select!`. That is what lets a consumer abandon a lexer
//! mid-stream without leaving the scanning thread blocked forever on its
//! next send.

use crossbeam_channel::{bounded, select, Receiver, Sender};

use crate::token::Item;

/// The scanner has been asked to stop: either the consumer received the
/// terminal item and hung up, or it cancelled mid-stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stopped;

/// Scanner-side handle: sends items, watches for cancellation.
pub(crate) struct ItemSender {
    items: Sender<Item>,
    cancel: Receiver<()>,
}

/// Consumer-side handle: receives items, cancels on drop.
pub(crate) struct ItemReceiver {
    items: Receiver<Item>,
    /// Held only so that dropping the receiver disconnects the cancel
    /// channel. `Option` so `Drop` on the lexer can hang up early.
    cancel: Option<Sender<()>>,
}

/// Create a connected rendezvous pair.
pub(crate) fn rendezvous() -> (ItemSender, ItemReceiver) {
    let (item_tx, item_rx) = bounded(0);
    let (cancel_tx, cancel_rx) = bounded(0);
    (
        ItemSender {
            items: item_tx,
            cancel: cancel_rx,
        },
        ItemReceiver {
            items: item_rx,
            cancel: Some(cancel_tx),
        },
    )
}

impl ItemSender {
    /// Blocks until the consumer takes `item`, or until the consumer has
    /// gone away, in which case `Err(Stopped)` tells the scanner to
    /// terminate.
    pub(crate) fn send(&self, item: Item) -> Result<(), Stopped> {
        select! {
            send(self.items, item) -> result => result.map_err(|_| Stopped),
            recv(self.cancel) -> _ => Err(Stopped),
        }
    }
}

impl ItemReceiver {
    /// Blocks until an item is available. `None` once the scanner has
    /// terminated and the channel is closed.
    pub(crate) fn recv(&self) -> Option<Item> {
        self.items.recv().ok()
    }

    /// Signals the scanner to stop at its next send.
    pub(crate) fn hang_up(&mut self) {
        self.cancel.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ItemKind;
    use std::thread;

    #[test]
    fn test_send_blocks_until_received() {
        let (tx, rx) = rendezvous();
        let producer = thread::spawn(move || {
            tx.send(Item::new(ItemKind::Text, 0, "a")).unwrap();
            tx.send(Item::new(ItemKind::Eof, 1, "")).unwrap();
        });
        assert_eq!(rx.recv().unwrap().kind, ItemKind::Text);
        assert_eq!(rx.recv().unwrap().kind, ItemKind::Eof);
        producer.join().unwrap();
    }

    #[test]
    fn test_recv_none_after_sender_dropped() {
        let (tx, rx) = rendezvous();
        drop(tx);
        assert!(rx.recv().is_none());
    }

    #[test]
    fn test_hang_up_unblocks_sender() {
        let (tx, mut rx) = rendezvous();
        let producer = thread::spawn(move || tx.send(Item::new(ItemKind::Text, 0, "a")));
        rx.hang_up();
        assert_eq!(producer.join().unwrap(), Err(Stopped));
    }

    #[test]
    fn test_dropped_receiver_unblocks_sender() {
        let (tx, rx) = rendezvous();
        let producer = thread::spawn(move || tx.send(Item::new(ItemKind::Text, 0, "a")));
        drop(rx);
        assert_eq!(producer.join().unwrap(), Err(Stopped));
    }
}
