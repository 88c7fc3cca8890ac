pub mod a001_client_scope;
