pub mod listing_server;
