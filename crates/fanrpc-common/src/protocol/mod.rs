pub mod error;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests;

pub use error::{FanrpcError, Result};
pub use requests::{
    translate_arguments, ArgKey, Call, CallArg, CallArgs, RpcRequest, DEFAULT_TIMEOUT_SECS,
    SYMBOL_PREFIX,
};
pub use responses::{NodeReply, STATUS_OK};
