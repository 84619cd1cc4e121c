//! # Blog Gateway Library
//!
//! A GraphQL gateway in front of a REST blog backend. Every field resolver is one HTTP
//! call, made through a typed, actor-backed client from [`rest_actor`].
//!
//! - **[model]**: Response shapes ([`User`](model::User), [`Post`](model::Post),
//!   [`Comment`](model::Comment)) and write payloads
//! - **[users], [posts], [comments]**: Resource modules (entity impl, error type, factory)
//! - **[clients]**: Type-safe wrappers, e.g. [`PostClient`](clients::PostClient)
//! - **[graphql]**: Query and mutation roots, relation resolvers, schema assembly
//! - **[lifecycle]**: [`GatewaySystem`](lifecycle::GatewaySystem), which starts, serves
//!   and stops everything
//! - **[config]**: [`GatewayOptions`](config::GatewayOptions), flags and environment

pub mod clients;
pub mod comments;
pub mod config;
pub mod graphql;
pub mod lifecycle;
pub mod model;
pub mod posts;
pub mod users;
