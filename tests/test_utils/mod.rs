pub mod mock_server;

pub use mock_server::{
    CapturedRequest, MockResponse, closed_port, spawn_server, spawn_stalled_server, tcp_listener,
};
