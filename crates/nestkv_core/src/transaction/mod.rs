//! Transaction frames.
//!
//! Each open transaction is a [`Frame`] holding an ordered log of pending
//! [`Operation`](crate::Operation)s. Frames live in an arena owned by the
//! [`Store`](crate::Store) and point at their parent by [`FrameId`](crate::FrameId).

mod frame;

pub(crate) use frame::Frame;
