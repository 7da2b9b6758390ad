//! Incremental Mirror256 hasher

use super::block::Block;
use super::cache::ScheduleCache;
use super::chunk::process_chunk;
use super::codec::{self, CHUNK_BYTES};
use super::key_schedule::KeySchedule;
use crate::config::MirrorConfig;
use crate::hash_result::HashResult;
use crate::{HashError, Result};
use std::sync::Arc;
use tracing::{debug, trace};

/// Mirror256 hasher.
///
/// Input accumulates in a pending buffer. Every full 32-byte chunk is hashed
/// and chained into this hasher's key schedule; whatever remains is padded
/// and hashed without chaining to produce the visible digest. The digest is
/// therefore current after every [`update`](Self::update).
#[derive(Clone, Debug)]
pub struct Mirror256 {
    config: MirrorConfig,
    buffer: Vec<u8>,
    counter: u64,
    chunks: u64,
    schedule: Arc<KeySchedule>,
    hashed: Block,
}

/// Factory equivalent to [`Mirror256::new`] followed by an optional update
#[must_use]
pub fn new(message: Option<&str>) -> Mirror256 {
    let config = MirrorConfig::default();
    let schedule = ScheduleCache::global().get_or_init(&config);
    Mirror256::from_parts(config, schedule, message)
}

impl Default for Mirror256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mirror256 {
    /// Hasher with depth 128, 256-bit output and the standard schedule
    #[must_use]
    pub fn new() -> Self {
        new(None)
    }

    /// Default hasher fed `message`
    #[must_use]
    pub fn with_message(message: &str) -> Self {
        new(Some(message))
    }

    /// Default hasher fed raw `bytes`, which must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInputType` if `bytes` is not valid UTF-8.
    pub fn try_with_message(bytes: &[u8]) -> Result<Self> {
        let message =
            std::str::from_utf8(bytes).map_err(|e| HashError::not_text("Mirror256()", &e))?;
        Ok(Self::with_message(message))
    }

    /// Hasher for `config`, seeded from the process-wide schedule cache
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `config` does not validate.
    pub fn with_config(config: MirrorConfig, message: Option<&str>) -> Result<Self> {
        Self::with_cache(config, &ScheduleCache::global(), message)
    }

    /// Hasher for `config`, seeded from `cache`
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `config` does not validate.
    pub fn with_cache(
        config: MirrorConfig,
        cache: &ScheduleCache,
        message: Option<&str>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, cache.get_or_init(&config), message))
    }

    /// Hasher using an explicit initial schedule instead of a cached one
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if `config` does not validate or
    /// `schedule` does not hold exactly `config.depth` keys of the block width.
    pub fn with_schedule(
        config: MirrorConfig,
        schedule: KeySchedule,
        message: Option<&str>,
    ) -> Result<Self> {
        config.validate()?;
        if schedule.depth() != config.depth || schedule.len() != config.depth {
            return Err(HashError::invalid_parameters(format!(
                "schedule holds {} of {} keys, config depth is {}",
                schedule.len(),
                schedule.depth(),
                config.depth
            )));
        }
        if let Some(short) = schedule.iter().position(|k| k.len() < config.nibbles()) {
            return Err(HashError::invalid_parameters(format!(
                "schedule key {short} is narrower than {} nibbles",
                config.nibbles()
            )));
        }
        Ok(Self::from_parts(config, Arc::new(schedule), message))
    }

    fn from_parts(
        config: MirrorConfig,
        schedule: Arc<KeySchedule>,
        message: Option<&str>,
    ) -> Self {
        let mut hasher = Self {
            config,
            buffer: Vec::with_capacity(CHUNK_BYTES),
            counter: 0,
            chunks: 0,
            schedule,
            hashed: Block::zeroed(0),
        };
        match message {
            Some(text) if !text.is_empty() => hasher.absorb(text.as_bytes()),
            // no input: the digest is that of the all-padding chunk
            _ => hasher.hashed = process_chunk(&[], &hasher.schedule, &hasher.config),
        }
        hasher
    }

    /// Feed more text and refresh the digest
    pub fn update(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.absorb(text.as_bytes());
        self
    }

    /// Feed raw bytes, which must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInputType` if `bytes` is not valid UTF-8.
    /// Nothing is buffered in that case.
    pub fn try_update(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| HashError::not_text("update()", &e))?;
        Ok(self.update(text))
    }

    fn absorb(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
        self.counter += bytes.len() as u64;

        let mut consumed = 0;
        while self.buffer.len() - consumed >= CHUNK_BYTES {
            let chunk = &self.buffer[consumed..consumed + CHUNK_BYTES];
            let block = process_chunk(chunk, &self.schedule, &self.config);
            if Arc::strong_count(&self.schedule) > 1 {
                debug!(depth = self.config.depth, "forking private key schedule");
            }
            Arc::make_mut(&mut self.schedule).push(block);
            consumed += CHUNK_BYTES;
            self.chunks += 1;
            trace!(chunk = self.chunks, chained = true, "processed chunk");
        }
        self.buffer.drain(..consumed);

        self.hashed = process_chunk(&self.buffer, &self.schedule, &self.config);
        trace!(pending = self.buffer.len(), chained = false, "refreshed digest");
    }

    /// Digest bytes, `size / 8` long
    #[must_use]
    pub fn digest(&self) -> Vec<u8> {
        codec::pack(&self.hashed, self.config.digest_len())
    }

    /// `0x` followed by the lowercase hex digest
    #[must_use]
    pub fn hexdigest(&self) -> String {
        format!("0x{}", hex::encode(self.digest()))
    }

    /// Digest wrapped for encoding
    #[must_use]
    pub fn result(&self) -> HashResult {
        HashResult::new(self.digest())
    }

    /// Total message bytes fed so far
    #[must_use]
    pub fn bytes_consumed(&self) -> u64 {
        self.counter
    }

    /// Full chunks chained into the schedule so far
    #[must_use]
    pub fn chunks_processed(&self) -> u64 {
        self.chunks
    }

    /// Bytes waiting for a full chunk
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Parameters this hasher was built with
    #[must_use]
    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Current key schedule
    #[must_use]
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }
}
