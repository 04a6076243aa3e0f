use seqio::reader::{DynamicFastXReader, FastXReader};
use seqio::record::{Record, SeqRecord};
use seqio::writer::{DynamicFastXWriter, FastXWriter};
use seqio::FileType;

use std::cmp::min;
use std::io::Write;

const HEADERS: [&str; 3] = [
    "SRR403017.1 HWUSI-EAS108E_0007:3:1:3797:973/1",
    "SRR403017.2 HWUSI-EAS108E_0007:3:1:10327:976/1",
    "SRR403017.3 HWUSI-EAS108E_0007:3:1:13569:972/1",
];
const SEQS: [&str; 3] = [
    "TTGGACCGGCGCAAGACGGACCAGNGCGAAAGCATTTGCCAAGAANNNN",
    "CAACTTTCTATCTGGCATTCCCTGNGGAGGAAATAGAATGCGCGCNNNN",
    "GATCGGAAGAGCACACGTCTGAACNCCAGTCACTTAGGCATCTCGNNNN",
];
const QUALS: [&str; 3] = [
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQ",
    "RSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~####",
    "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@",
];

fn split_seq_to_lines(seq: &str, line_length: usize) -> Vec<&str>{
    let mut i: usize = 0;
    let mut lines = Vec::new();
    while line_length*i < seq.len(){
        lines.push(&seq[line_length*i .. min(line_length*(i+1), seq.len())]);
        i += 1;
    }
    lines
}

fn check_records(records: &[SeqRecord], with_qual: bool){
    assert_eq!(records.len(), HEADERS.len());
    for (i, rec) in records.iter().enumerate(){
        assert_eq!(rec.name(), HEADERS[i]);
        assert_eq!(rec.seq(), SEQS[i]);
        if with_qual{
            assert_eq!(rec.qual(), Some(QUALS[i]));
        } else {
            assert_eq!(rec.qual(), None);
        }
    }
}

#[test]
fn fastq(){
    let mut fastq_data = String::new();
    for i in 0..HEADERS.len(){
        fastq_data.push_str(&format!("@{}\n{}\n+\n{}\n", HEADERS[i], SEQS[i], QUALS[i]));
    }

    let reader = FastXReader::new(fastq_data.as_bytes(), FileType::FASTQ);
    let records: Vec<SeqRecord> = reader.collect::<Result<_, _>>().unwrap();
    check_records(&records, true);

    // Test writer
    let mut writer = FastXWriter::new(Vec::<u8>::new(), FileType::FASTQ);
    assert_eq!(writer.write_all(&records).unwrap(), 3);
    let written_data = writer.into_inner().unwrap();

    // FASTQ has a fixed layout, so the bytes come back identical
    assert_eq!(written_data, fastq_data.as_bytes());
}

#[test]
fn fasta(){
    let mut fasta_data = String::new();
    for i in 0..HEADERS.len(){
        fasta_data.push_str(&format!(">{}\n", HEADERS[i]));
        // Line length 11 should make it so that the last line has a different
        // length than the other lines.
        for line in split_seq_to_lines(SEQS[i], 11){
            fasta_data.push_str(&format!("{}\n", line));
        }
    }

    let reader = FastXReader::new(fasta_data.as_bytes(), FileType::FASTA);
    let records: Vec<SeqRecord> = reader.collect::<Result<_, _>>().unwrap();
    check_records(&records, false);

    let mut writer = FastXWriter::new(Vec::<u8>::new(), FileType::FASTA);
    writer.write_all(&records).unwrap();
    let written_data = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    // Every sequence is written on a single line
    assert_eq!(written_data.lines().count(), 2 * HEADERS.len());

    let reader2 = FastXReader::new(written_data.as_bytes(), FileType::FASTA);
    let records2: Vec<SeqRecord> = reader2.collect::<Result<_, _>>().unwrap();
    assert_eq!(records, records2);
}

#[test]
fn files_on_disk(){
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("in.fastq");
    let out_path = dir.path().join("out.fastq");

    let mut file = std::fs::File::create(&in_path).unwrap();
    for i in 0..HEADERS.len(){
        write!(file, "@{}\n{}\n+{}\n{}\n", HEADERS[i], SEQS[i], HEADERS[i], QUALS[i]).unwrap();
    }
    drop(file);

    let filetype = seqio::figure_out_file_format(&in_path).unwrap();
    let mut reader = DynamicFastXReader::from_path(&in_path, filetype).unwrap();
    let mut writer = DynamicFastXWriter::to_path(&out_path, filetype).unwrap();
    while let Some(rec) = reader.read_next().unwrap(){
        writer.write(&rec).unwrap();
    }
    writer.flush().unwrap();
    assert_eq!(reader.records_read(), 3);

    let reader = DynamicFastXReader::from_path(&out_path, FileType::FASTQ).unwrap();
    let records: Vec<SeqRecord> = reader.collect::<Result<_, _>>().unwrap();
    check_records(&records, true);
}

#[test]
fn missing_file(){
    let dir = tempfile::tempdir().unwrap();
    let res = DynamicFastXReader::from_path(dir.path().join("nope.fa"), FileType::FASTA);
    assert!(matches!(res, Err(seqio::Error::Io(_))));
}
