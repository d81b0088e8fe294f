use futures::StreamExt;
use poise::serenity_prelude as serenity;
use tracing::Instrument;

use crate::constants::STATUS_ROTATION;

pub struct StatusRotation {
    current: usize,
}

impl StatusRotation {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn advance(&mut self) -> &'static str {
        let status = STATUS_ROTATION[self.current];
        self.current = (self.current + 1) % STATUS_ROTATION.len();

        status
    }
}

pub fn spawn_rotation(ctx: serenity::Context) -> tokio::task::JoinHandle<()> {
    tokio::spawn(
        async move {
            let interval = tokio::time::interval(std::time::Duration::from_secs(20));
            let task = futures::stream::unfold(
                (interval, StatusRotation::new()),
                |(mut interval, mut rotation)| async {
                    interval.tick().await;
                    ctx.set_presence(
                        Some(serenity::ActivityData::playing(rotation.advance())),
                        serenity::OnlineStatus::Online,
                    );

                    Some(((), (interval, rotation)))
                },
            );

            task.for_each(|_| async {}).await;
        }
        .in_current_span(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_back_to_start() {
        let mut rotation = StatusRotation::new();

        let first = rotation.advance();
        for _ in 0..STATUS_ROTATION.len() - 1 {
            rotation.advance();
        }

        assert_eq!(rotation.advance(), first);
    }

    #[test]
    fn rotation_yields_every_entry_in_order() {
        let mut rotation = StatusRotation::new();

        for expected in STATUS_ROTATION {
            assert_eq!(rotation.advance(), expected);
        }
    }

    #[test]
    fn rotation_entries_are_nonempty() {
        for status in STATUS_ROTATION {
            assert!(!status.is_empty());
        }
    }
}
