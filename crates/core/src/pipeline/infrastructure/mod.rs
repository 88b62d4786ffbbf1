pub mod json_replay_reader;
