//! Cache module - Redis client and the ExpiringCache implementation

pub mod redis_client;

pub use redis_client::RedisClient;
