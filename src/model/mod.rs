/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/
/// Token pair and auth endpoint payloads
pub mod auth;
/// Authenticated HTTP client with bounded 401 recovery
pub mod http;
