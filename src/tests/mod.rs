pub mod test_softmax;
