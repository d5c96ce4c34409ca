pub mod test_loss;
pub mod test_network;
