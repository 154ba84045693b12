pub mod phase_ops;
