use crate::NumericError;

/// A fixed random DNA sequence for tests and benchmarks that depend on
/// sequence length.
pub const REFERENCE_SEQUENCE: &str = concat!(
    "TTCCGTAGCGGAGGTCTATGTCCTCAATGTTTCGCGTCGTATTTATTTGCAAACAGATAC",
    "GCATTCCCCCCCTGCCTTCCGAGCTGTTGCTACTTCACCAACTCGCGCTTAATGCATGAA",
    "ACTCTAGTTCACTCACCGATTAGTTATCGATTAAGAAGAGACCAGTTGGGAATTAGCTAA",
    "CCGCAACAAGAACGACCATATAGAGTTGTCTCCTAGTCTCAGCATTTGGCGAGGTTCAGT",
    "CCTTATTGCACGCTGGACCAAACGTCTCCTTGTCTACTAAAAATTCAATGGACTATGAGG",
    "AGCTCGTATAGAAGCTCGAATGGGTGCTCTATCCTCCGACTGTTTGAAAACATATGAAGA",
    "CCAACGGTAATACACACGGTATCTACTTCAAGAAGCTGTGTTTGCCGAGCTCGACGATGT",
    "CACTGGCCGGTCCGGTGTGTACACCTATAGGGGGATTTGGTGTCCCCTTGTAGAAGCTAA",
    "GTTACCTGTTTGGCTATTAGCGTCGTGTGTAATGTTAATCTGCGATACTTATGAAATCGC",
    "ATTGGTTTGCAGTTTCTCTACGCTGGTGTAGGACCGAGATAAAGTCGTGCGATAGTTATA",
    "TAAGTACGAGAGTCAGAGCGCCGTTCAATAAGGTCCCGTGCCGTCCCCCCGTTGTTGCTG",
    "TCTCCTTGCGAAATGGATGATGACCAGGTTGGATAGAGAGCGCGACTTCTCGCTGGCTCG",
    "GTGATCGCTCGAGACTAGGACAACGGGGGCTATTGAGTGGACCTGACTACTATCCTATTG",
    "TCAGAAATGGCCACCTACACGCCTAACTGACTGGACGTTCGTAGTTGATCTGTTAAAACG",
    "AGAACTAGCACACTCAACGGCGTGGGGGCTAGTCTTAGGAAAAGTTTGGAGAAGAAAGAA",
    "GACCAACGGAACCCATCGATTTGAATTGACGTTGGTGTCTTTTCGTACAAGACAGAGGCA",
    "AAATTATTTTGCTTACTTCGTCATACAAAATCATTATCCCTTGACCTGCGGCCCCGCGTA",
    "ACACCACCTCTCTGATAAGTAGGTTGACTATTCAGGGGGTCCACGAGCTACACGATCGTG",
    "CTCAAGAATTCCTTCCGGAATTGACGCGTAATCAACAAAAACCGATATTAGGACGGGCCT",
    "GAGTAAGATAGTTGTAGGTGTCCACGGTCTAGTTAGGGTGGTGGGTCCGAGTTCGCGTTA",
    "CTTTGTTCTGTCAAACTCGGCCTGTGTGCCGAGATAAAGGCCACGATCGTTATATCATGC",
    "CAAGCGTCGACAGTCGGAAGGAACGCAATCCGACCGTTCGACCCGTGACCCGTGCCATAA",
    "GGACAAACATCGAACATTATTTGCGGGAAAATTCCTACGAAGCGTCGCGCTTCGCAGGAG",
    "TGTACTAACTATGTAAGGGAAACCTTACCACAGCTCGCATAGCTGTTTTCAGCTGGTGTG",
    "TTCATTTCAAGCGGTAGGTGATTTTCAGATAGTGGCGCGGCCCTGCGGATGCGTTGGTGC",
    "TAACACCCTCTATCGACGGGTATGGGTAGGATTGAAACCCTGCTGTATGTGTTAGATATC",
    "GATGCCGACTGGAGCTCGGCCATGCTTCGTATAAATTGTTCGATTCGTCACGGGGGGCCC",
    "AAGAAATATGGCAAATACACAAATCGGGGTTATCGTGTTTGATTCGACCATCTCCTACCG",
    "GCACAATACACATTTTTACGGTTACATTACTCACTGCGTGAACTGACTGGAATCGTCTCT",
    "TGTTGGCCCATCACAAAAGCTTTGCGTAAGGCTGTATGAATGCTTTACGTTTCTGGCTGA",
    "TACTGCTTAGGGGCCGATTATCTAGAGGAATTAACACCCACCGTGTTGTCCGGAGGGTGC",
    "GCCGAGTTCCGATTAGACTAAGAAAGCGTGGTCGGATATAGGCAATATCGGTGCCCAGTT",
    "CACCTGCTGGATCTCTTGCCCGTGCGCAACGCGGTGATACTTTGATTGATCCTTGATCGT",
    "AATCCGTGACCTGGAAGATGTACTCTTACAAACACGCACTGAACCCGGCGTCGCTCTCGA",
    "GCGGTGTAGGAAATCTCTATTTCCCCTGTGCTTGTGTCTGTAGATTACCTTACACGTTTT",
    "ACTGTATGATGCGCATGCCTTTTCGAGGTACCCCGGGCTTGGAACGTAGTGGGGAGCGGG",
    "TTGACTTTTCATCTAATCAACCGCTAGGTATTACCACTAAAGGATCATCCAATTAACATC",
    "ATTTCGGCATTCACCAAATTGTTTGGGTGAGTGATCTCTAGACTAATGTACTGACTAAAT",
    "CAATCTACATGGGTCTCCAAAAGTGTTCCGTGGTACCCCTACTACCACCCTCCGACCTTG",
    "ATGGAATAGTAGCGGGAGTCTGGAGTTGATGGGACACAGCATTCCTGGATGGAACAAAAT",
    "CCGGTCGAACTGGCACGAGCTTAACAATCATACGCATCGACGCGGATAATCGCGGGTTGT",
    "TCGTACCAACTAATGCCTTATAAAGAAGCCACGGCAGATGTGACTAGACAGCAACTAGTG",
    "AGGTGTGCAGCAGAGCGCCAACACGTTACCAGAGCGAACGTATTAATATAATTATTCATG",
    "CTATAACAGTCGCCAACTAGTCTACACATGGAGGCACCTGTGGTGGGGCCATTTAATGCA",
    "CATGTGGCCGATTGCACAAAGATGGGGCAGACTATCTCAAGTCGGATCGCTATTTATTCT",
    "CCTTCACTAAGCCGACAAGCTTATATTAAATCGCCACACTACAACGTAACTGTGGAATAC",
    "AGCCTGGGTCACTACAGTAGTTGTCTCTTCAGCGGCGATACATAGAGGCATGAGCAATGT",
    "AGACGTTGCAAGCCTCAGCATGAAAGACGCTGATTATAAATCTCCCAGAAATTTTCAAGC",
    "TTAGTTGCCACATAGCTCGGCTTTTCTAATTATCTCCTCTCCGGCTTCACGTGTGCCGCC",
    "CCCAGCATTAAGTTCTTACCCCCATTGAAACGATCCGTCATGTCAATTTGAGTTATCGGC",
);

/// The first `length` nucleotides of [`REFERENCE_SEQUENCE`].
pub fn reference_dna(length: usize) -> Result<&'static str, NumericError> {
    if length > REFERENCE_SEQUENCE.len() {
        return Err(NumericError::OutOfRange {
            requested: length,
            available: REFERENCE_SEQUENCE.len(),
        });
    }
    Ok(&REFERENCE_SEQUENCE[..length])
}
